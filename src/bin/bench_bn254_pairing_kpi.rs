use bn254_verifier::bn254_field::Fp;
use bn254_verifier::bn254_final_exp::final_exponentiation;
use bn254_verifier::bn254_group::{G1Affine, G2Affine};
use bn254_verifier::bn254_pairing::miller_loop;
use bn254_verifier::bn254_vk_constants::{SAMPLE_PROOF_HEX, SAMPLE_PUBLIC_HASH_HEX};
use bn254_verifier::bn254_vk_registry::VkRegistry;
use std::time::{Duration, Instant};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn die(msg: &str) -> ! {
    eprintln!("error: {msg}");
    std::process::exit(1);
}

fn env_usize(key: &str, default: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

fn next_u64(state: &mut u64) -> u64 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *state = x;
    x
}

fn next_fp(state: &mut u64) -> Fp {
    let limbs = [next_u64(state), next_u64(state), next_u64(state), next_u64(state) >> 3];
    Fp::from_limbs_mod_p(limbs)
}

fn report(name: &str, n: usize, elapsed: Duration) {
    let per = elapsed / n.max(1) as u32;
    println!("bn254 pairing kpi: {name} n={n} total={elapsed:.2?} per_op={per:.2?}");
}

fn main() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let mul_n = env_usize("BN254_KPI_FP_MUL", 200_000);
    let miller_n = env_usize("BN254_KPI_MILLER", 20);
    let final_exp_n = env_usize("BN254_KPI_FINAL_EXP", 20);
    let verify_n = env_usize("BN254_KPI_VERIFY", 5);
    let seed = env_u64("BN254_KPI_SEED", 0x5a17_3d2f_9a4c_e1b3);

    let mut state = seed;
    let inputs: Vec<(Fp, Fp)> = (0..mul_n)
        .map(|_| (next_fp(&mut state), next_fp(&mut state)))
        .collect();
    let start = Instant::now();
    let mut acc = Fp::one();
    for (a, b) in inputs.iter() {
        acc = acc.add(a.mul(*b));
    }
    report("fp_mul", mul_n, start.elapsed());
    if acc.is_zero() {
        println!("bn254 pairing kpi: fp_mul accumulator hit zero");
    }

    let p = G1Affine::generator();
    let q = G2Affine::generator();
    let start = Instant::now();
    let mut f = miller_loop(&q, &p);
    for _ in 1..miller_n {
        f = miller_loop(&q, &p);
    }
    report("miller_loop", miller_n, start.elapsed());

    let start = Instant::now();
    let mut e = final_exponentiation(&f);
    for _ in 1..final_exp_n {
        e = final_exponentiation(&f);
    }
    report("final_exp", final_exp_n, start.elapsed());
    if e.is_one() {
        die("generator pairing is degenerate");
    }

    let registry = match VkRegistry::with_default() {
        Ok(r) => r,
        Err(err) => die(&format!("default vk: {err}")),
    };
    let proof = match hex::decode(SAMPLE_PROOF_HEX) {
        Ok(p) => p,
        Err(err) => die(&format!("sample proof hex: {err}")),
    };
    let mut public_hash = [0u8; 32];
    if let Err(err) = hex::decode_to_slice(SAMPLE_PUBLIC_HASH_HEX, &mut public_hash) {
        die(&format!("sample public hash hex: {err}"));
    }
    let program_hash = match bn254_verifier::bn254_vk_registry::default_program_vk() {
        Ok((hash, _)) => hash,
        Err(err) => die(&format!("default vk: {err}")),
    };
    let start = Instant::now();
    for _ in 0..verify_n {
        match registry.verify(&program_hash, &proof, &public_hash) {
            Ok(true) => {}
            Ok(false) => die("sample proof rejected"),
            Err(err) => die(&format!("sample proof: {err}")),
        }
    }
    report("groth16_verify", verify_n, start.elapsed());
}
