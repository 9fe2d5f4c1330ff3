//! Generate a deterministic sample benchmark CSV for trying out the viewer.
//!
//! Reproduces the shape of the inverse-square-root benchmark output:
//! four methods evaluated over `Valor` 1..=100, with the reference result
//! taken from `1 / x.sqrt()`.

use std::error::Error;

const OUT_FILE: &str = "sample_data.csv";

fn inv_sqrt_math(x: f32) -> f32 {
    1.0 / x.sqrt()
}

/// Newton-Raphson on f(r) = 1/r² − x, seeded from the exponent bits.
fn nr_invsqrt(x: f32) -> f32 {
    let mut r = f32::from_bits(0x5f00_0000_u32.wrapping_sub(x.to_bits() >> 1));
    for _ in 0..4 {
        r = r * (1.5 - 0.5 * x * r * r);
    }
    r
}

/// Newton-Raphson square root, then reciprocal.
fn nr_sqrt(x: f32) -> f32 {
    let mut s = x;
    for _ in 0..4 {
        s = 0.5 * (s + x / s);
    }
    1.0 / s
}

/// The classic fast inverse square root with the 0x5f3759df magic constant.
fn fast_invsqrt_tarolli(x: f32) -> f32 {
    let i = 0x5f37_59df_u32.wrapping_sub(x.to_bits() >> 1);
    let r = f32::from_bits(i);
    r * (1.5 - 0.5 * x * r * r)
}

/// Minimal deterministic PRNG (64-bit LCG) for timing jitter.
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let methods: [(&str, fn(f32) -> f32, f64); 4] = [
        ("math.h", inv_sqrt_math, 2.0e-8),
        ("NR-sqrt", nr_sqrt, 9.0e-8),
        ("NR-invsqrt", nr_invsqrt, 7.0e-8),
        ("Tarolli", fast_invsqrt_tarolli, 3.0e-8),
    ];

    let mut rng = Lcg(42);
    let mut writer = csv::Writer::from_path(OUT_FILE)?;
    writer.write_record(["Valor", "Metodo", "Resultado", "Tempo(s)", "Erro"])?;

    for x in 1..=100u32 {
        let x = x as f32;
        let reference = inv_sqrt_math(x);

        for (name, method, base_time) in methods {
            let result = method(x);
            let error = (result - reference).abs();
            let time = base_time * (0.9 + 0.2 * rng.next_f64());

            writer.write_record([
                format!("{x}"),
                name.to_string(),
                format!("{result:.20}"),
                format!("{time:.20}"),
                format!("{error:.20}"),
            ])?;
        }
    }

    writer.flush()?;
    println!("Wrote {OUT_FILE}");
    Ok(())
}
