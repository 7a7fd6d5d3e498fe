use {
    snowflake::{IdParts, Snowflake, SystemClock},
    std::{error::Error, time::Duration},
};

fn main() -> Result<(), Box<dyn Error>> {
    let worker_id = 7;
    let epoch = Duration::from_millis(1609459200000); // 2021-01-01 00:00:00.000 UTC
    let snowflake = Snowflake::with_clock(worker_id, SystemClock::with_epoch(epoch))?;
    let sfid = snowflake.generate()?;
    let parts = IdParts::decompose(sfid);
    println!("Snowflake ID: {}", sfid);
    println!("Milliseconds since 2021-01-01: {}", parts.timestamp);
    Ok(())
}
