use anyhow::Context;
use aperture_alpha::get_alpha;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let (mr, g_i, n_ser, q) = (-22.1, 1.1, 1.2, 0.3);
    let alpha = get_alpha(mr, g_i, n_ser, Some(q)).context("alpha lookup failed")?;
    println!("{alpha}");

    Ok(())
}
