use {
    std::time::Duration,
    structopt::StructOpt,
    tracing_subscriber::EnvFilter,
    ipinfo::{context::Context, lookup::LookupClient},
};

#[derive(StructOpt)]
struct Args {
    /// IP address to look up.
    ip: String,

    /// Lookup deadline in milliseconds.
    #[structopt(long, default_value = "5000")]
    timeout_ms: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::from_args();
    let client = LookupClient::new()?;
    let ctx = Context::background().with_timeout(Duration::from_millis(args.timeout_ms));

    let record = client.lookup(&ctx, &args.ip).await?;

    println!("{record:#?}");
    println!("ec2: {}", record.is_ec2());
    println!("gcp: {}", record.is_gcp());
    println!("googlebot: {}", record.is_google_bot());

    Ok(())
}
