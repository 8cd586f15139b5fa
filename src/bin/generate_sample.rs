//! Writes synthetic IR and XANES spectra in the whitespace-delimited
//! two-column format the viewer accepts.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// Sum of Gaussian bands plus noise, scaled into [0, 1].
fn generate_spectrum(
    axis: &[f64],
    peaks: &[(f64, f64, f64)],
    noise_level: f64,
    rng: &mut SimpleRng,
) -> Vec<f64> {
    let raw: Vec<f64> = axis
        .iter()
        .map(|&x| {
            let signal: f64 = peaks
                .iter()
                .map(|&(mu, sigma, amp)| gaussian(x, mu, sigma, amp))
                .sum();
            (signal + rng.gauss(0.0, noise_level)).max(0.0)
        })
        .collect();
    let max = raw.iter().cloned().fold(0.0, f64::max);
    if max <= 0.0 {
        return raw;
    }
    raw.iter().map(|v| v / max).collect()
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn write_spectrum(path: &Path, unit: &str, x: &[f64], y: &[f64]) -> Result<()> {
    let mut out = format!("{unit} I\n");
    for (xi, yi) in x.iter().zip(y) {
        writeln!(out, "{xi:.3} {yi:.5}")?;
    }
    std::fs::write(path, out).with_context(|| format!("writing {}", path.display()))
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let out_dir = Path::new("demo_spectra");
    std::fs::create_dir_all(out_dir).context("creating demo_spectra")?;

    // IR: 4000 → 400 cm-1, step 2
    let wavenumbers: Vec<f64> = (0..1800).map(|i| 4000.0 - i as f64 * 2.0).collect();
    let ir_samples: [(&str, Vec<(f64, f64, f64)>); 3] = [
        // broad O-H, C-H stretch, carbonyl
        ("ethanol_acetone.txt", vec![(3350.0, 120.0, 0.8), (2950.0, 30.0, 0.5), (1715.0, 15.0, 1.0)]),
        // nitrile and aromatic C=C
        ("benzonitrile.txt", vec![(3060.0, 20.0, 0.3), (2230.0, 8.0, 0.9), (1600.0, 10.0, 0.6), (1490.0, 10.0, 0.5)]),
        // carboxylic acid: very broad O-H and C=O
        ("acetic_acid.txt", vec![(3000.0, 250.0, 0.6), (1710.0, 18.0, 1.0), (1290.0, 20.0, 0.5)]),
    ];
    for (name, peaks) in &ir_samples {
        let y = generate_spectrum(&wavenumbers, peaks, 0.005, &mut rng);
        write_spectrum(&out_dir.join(name), "cm-1", &wavenumbers, &y)?;
    }

    // XANES: carbon K-edge region, 280 → 310 eV, step 0.05
    let energies: Vec<f64> = (0..600).map(|i| 280.0 + i as f64 * 0.05).collect();
    let xanes_samples: [(&str, Vec<(f64, f64, f64)>); 2] = [
        ("polystyrene_xanes.txt", vec![(285.2, 0.3, 1.0), (287.3, 0.5, 0.2), (293.0, 2.0, 0.5)]),
        ("pmma_xanes.txt", vec![(288.4, 0.4, 1.0), (292.3, 2.5, 0.4), (300.0, 3.0, 0.3)]),
    ];
    for (name, peaks) in &xanes_samples {
        let y = generate_spectrum(&energies, peaks, 0.003, &mut rng);
        write_spectrum(&out_dir.join(name), "eV", &energies, &y)?;
    }

    println!(
        "Wrote {} spectra to {}",
        ir_samples.len() + xanes_samples.len(),
        out_dir.display()
    );
    Ok(())
}
