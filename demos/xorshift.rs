//! xorshift32 as a linear map over GF(2)
//!
//! Builds the 32 × 32 transition matrix of Marsaglia's xorshift32 from
//! shift matrices and checks it against the generator itself. With a
//! jump count, T^k is formed by repeated squaring and used to skip ahead.
//!
//! ```text
//! cargo run --example xorshift -- --seed 2463534242 --steps 8 --jump 1000
//! ```

use anyhow::{bail, Context, Result};
use clap::Parser;
use gf2mat::{
    algebra::ONE, mul, to_dense_binary, AnyMatrix, DenseBinary, Identity, Matrix, Poly, Shift,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const BITS: usize = 32;

#[derive(Parser, Debug)]
#[command(name = "xorshift", about = "Step xorshift32 through its GF(2) transition matrix")]
struct Cli {
    /// Non-zero starting state.
    #[arg(long, default_value_t = 2_463_534_242)]
    seed: u32,
    /// Number of single steps to compare.
    #[arg(long, default_value_t = 8)]
    steps: usize,
    /// Skip ahead this many steps with T^k.
    #[arg(long)]
    jump: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();
    if cli.seed == 0 {
        bail!("seed must be non-zero");
    }

    let t = transition().context("failed to build transition matrix")?;
    info!(ones = t.count_ones(), "transition matrix ready");

    let mut state = cli.seed;
    let mut vector = state_vector(state)?;
    for step in 1..=cli.steps {
        state = xorshift32(state);
        vector = mul(&vector, &t)?;
        let via_matrix = read_state(&vector)?;
        println!("step {step}\t{state:#010x}\t{via_matrix:#010x}");
        if via_matrix != state {
            bail!("matrix diverged from generator at step {step}");
        }
    }

    if let Some(k) = cli.jump {
        let jump = power(&t, k)?;
        let jumped = read_state(&mul(&state_vector(cli.seed)?, &jump)?)?;
        let stepped = (0..k).fold(cli.seed, |x, _| xorshift32(x));
        println!("jump {k}\t{stepped:#010x}\t{jumped:#010x}");
        if jumped != stepped {
            bail!("T^{k} disagrees with {k} generator steps");
        }
    }
    Ok(())
}

fn xorshift32(mut x: u32) -> u32 {
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    x
}

/// `I + S(n)`: one `x ^= x shifted by n` step on a row vector whose
/// column `i + 1` holds bit `i`.
fn xor_shift(n: isize) -> Result<DenseBinary> {
    let mut m = to_dense_binary(&Shift::new(BITS, n)?)?;
    for i in 1..=BITS {
        m.add_at(i, i, &ONE)?;
    }
    Ok(m)
}

fn transition() -> Result<DenseBinary> {
    let left = xor_shift(13)?;
    let right = xor_shift(-17)?;
    let t = mul(&mul(&left, &right)?, &xor_shift(5)?)?;
    Ok(to_dense_binary(&t)?)
}

/// T^k by square and multiply.
fn power(t: &DenseBinary, mut k: u64) -> Result<AnyMatrix> {
    let mut result: AnyMatrix = Identity::new(BITS, BITS)?.into();
    let mut base: AnyMatrix = t.clone().into();
    while k > 0 {
        if k & 1 == 1 {
            result = mul(&result, &base)?;
        }
        base = mul(&base, &base)?;
        k >>= 1;
    }
    debug!(kind = result.kind().name(), "power ready");
    Ok(result)
}

fn state_vector(state: u32) -> Result<AnyMatrix> {
    let mut v = DenseBinary::new(1, BITS)?;
    for bit in 0..BITS {
        v.set_at(1, bit + 1, Poly::from((state >> bit) & 1 == 1))?;
    }
    Ok(v.into())
}

fn read_state<M: Matrix>(v: &M) -> Result<u32> {
    let mut state = 0u32;
    for bit in 0..BITS {
        if v.at(1, bit + 1)?.is_one() {
            state |= 1 << bit;
        }
    }
    Ok(state)
}
