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

fn main() {
    let mut rng = SimpleRng::new(42);

    let sites = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];
    // Rough per-site share of launches and baseline success rate.
    let site_weights = [0.45, 0.15, 0.20, 0.20];
    let site_success = [0.55, 0.40, 0.75, 0.60];
    // Booster categories by era: early flights fly old hardware.
    let booster_eras = ["v1.0", "v1.1", "FT", "B4", "B5"];

    let n_launches: usize = 90;
    let output_path = "spacex_launch_dash.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    writer
        .write_record([
            "Flight Number",
            "Launch Site",
            "class",
            "Payload Mass (kg)",
            "Booster Version Category",
        ])
        .expect("Failed to write header");

    for flight in 1..=n_launches {
        // Weighted site pick.
        let roll = rng.next_f64();
        let mut acc = 0.0;
        let mut site_idx = sites.len() - 1;
        for (i, w) in site_weights.iter().enumerate() {
            acc += w;
            if roll < acc {
                site_idx = i;
                break;
            }
        }

        // Payload mass: normal around 4 t, clamped to the slider domain.
        let payload = rng.gauss(4000.0, 2500.0).clamp(0.0, 10000.0);

        let era = (flight - 1) * booster_eras.len() / n_launches;
        let booster = booster_eras[era];

        // Heavier payloads land less often; later hardware lands more often.
        let p_success = (site_success[site_idx] - payload / 40000.0
            + era as f64 * 0.05)
            .clamp(0.05, 0.95);
        let class = u8::from(rng.next_f64() < p_success);

        writer
            .write_record([
                flight.to_string(),
                sites[site_idx].to_string(),
                class.to_string(),
                format!("{payload:.1}"),
                booster.to_string(),
            ])
            .expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output file");
    println!("Wrote {n_launches} launches to {output_path}");
}
