use bn254_verifier::bn254_curve::{g1_from_be_bytes, g2_from_be_bytes};
use bn254_verifier::bn254_group::{G1Affine, G2Affine};
use bn254_verifier::bn254_pairing_trace::pairing_traced;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn die(msg: &str) -> ! {
    eprintln!("error: {msg}");
    std::process::exit(1);
}

fn env_bytes(key: &str) -> Option<Vec<u8>> {
    let raw = std::env::var(key).ok()?;
    let raw = raw.trim();
    let raw = raw.strip_prefix("0x").unwrap_or(raw);
    match hex::decode(raw) {
        Ok(bytes) => Some(bytes),
        Err(err) => die(&format!("{key}: {err}")),
    }
}

fn main() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let p = match env_bytes("BN254_TRACE_G1") {
        Some(bytes) => match g1_from_be_bytes(&bytes) {
            Ok(p) => p,
            Err(err) => die(&format!("BN254_TRACE_G1: {err}")),
        },
        None => G1Affine::generator(),
    };
    let q = match env_bytes("BN254_TRACE_G2") {
        Some(bytes) => match g2_from_be_bytes(&bytes) {
            Ok(q) => q,
            Err(err) => die(&format!("BN254_TRACE_G2: {err}")),
        },
        None => G2Affine::generator(),
    };

    let (out, miller, final_exp) = pairing_traced(&q, &p);
    for line in miller.to_hex_lines() {
        println!("miller {line}");
    }
    for (name, value) in final_exp.iter() {
        println!("final_exp {name} {}", hex::encode(value.to_be_bytes()));
    }
    println!("pairing {}", hex::encode(out.to_be_bytes()));
}
