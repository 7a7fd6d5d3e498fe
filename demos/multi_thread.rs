use {
    snowflake::Snowflake,
    std::{
        error::Error,
        sync::{mpsc, Arc},
        thread,
    },
    tracing_subscriber::EnvFilter,
};

fn main() -> Result<(), Box<dyn Error>> {
    // Build with `--features tracing` and set RUST_LOG=snowflake=trace to see
    // the generator's own events.
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let worker_id = 1;
    let snowflake = Arc::new(Snowflake::new(worker_id)?);
    let (tx, rx) = mpsc::channel();

    let handles = (0 .. 10)
        .map(|thread_id| {
            let snowflake = Arc::clone(&snowflake);
            let tx = tx.clone();

            thread::spawn(move || match snowflake.generate() {
                Ok(sfid) => {
                    let _ = tx.send(sfid);
                }
                Err(e) => {
                    tracing::error!(thread_id, error = %e, "generate error");
                }
            })
        })
        .collect::<Vec<_>>();
    drop(tx);

    for handle in handles {
        let _ = handle.join();
    }

    for sfid in rx {
        tracing::info!(sfid, "generated");
        println!("Snowflake ID: {}", sfid);
    }

    Ok(())
}
