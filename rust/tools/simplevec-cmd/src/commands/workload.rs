use anyhow::{Result, bail, ensure};
use simplevec::SimpleVec;

/// Operation counts and final shape of a workload run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WorkloadStats {
    pub pushes: usize,
    pub inserts: usize,
    pub erases: usize,
    pub pops: usize,
    pub resizes: usize,
    pub lookups: usize,
    pub rejected: usize,
    pub reallocations: usize,
    pub final_len: usize,
    pub final_capacity: usize,
}

/// Applies `ops` random operations to a `SimpleVec` and a `Vec` in lockstep,
/// failing on the first divergence.
pub fn execute(ops: usize, seed: u64) -> Result<WorkloadStats> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut actual = SimpleVec::<u64>::new();
    let mut expected = Vec::<u64>::new();
    let mut stats = WorkloadStats::default();

    for step in 0..ops {
        let capacity = actual.capacity();
        match rng.u8(0..8) {
            0..=2 => {
                let value = rng.u64(..);
                actual.push_back(value);
                expected.push(value);
                stats.pushes += 1;
            }
            3 => {
                let position = rng.usize(0..=expected.len() + 1);
                let value = rng.u64(..);
                match actual.insert(position, value) {
                    Ok(at) => {
                        ensure!(at == position, "step {step}: insert returned {at}");
                        expected.insert(position, value);
                        stats.inserts += 1;
                    }
                    Err(e) if position > expected.len() => {
                        log::debug!("step {step}: rejected insert: {e}");
                        stats.rejected += 1;
                    }
                    Err(e) => bail!("step {step}: insert at {position} failed: {e}"),
                }
            }
            4 => {
                let position = rng.usize(0..=expected.len());
                match actual.erase(position) {
                    Ok(at) => {
                        ensure!(at == position, "step {step}: erase returned {at}");
                        expected.remove(position);
                        stats.erases += 1;
                    }
                    Err(e) if position >= expected.len() => {
                        log::debug!("step {step}: rejected erase: {e}");
                        stats.rejected += 1;
                    }
                    Err(e) => bail!("step {step}: erase at {position} failed: {e}"),
                }
            }
            5 if !expected.is_empty() => {
                ensure!(
                    actual.pop_back() == expected.pop(),
                    "step {step}: pop_back diverged"
                );
                stats.pops += 1;
            }
            6 => {
                let new_size = rng.usize(0..=expected.len() + 16);
                actual.resize(new_size);
                expected.resize(new_size, 0);
                stats.resizes += 1;
            }
            _ => {
                let index = rng.usize(0..=expected.len() + 4);
                ensure!(
                    actual.at(index).ok() == expected.get(index),
                    "step {step}: at({index}) diverged"
                );
                stats.lookups += 1;
            }
        }

        if actual.capacity() != capacity {
            stats.reallocations += 1;
        }
        ensure!(
            actual.as_slice() == expected.as_slice(),
            "step {step}: contents diverged (len {} vs {})",
            actual.len(),
            expected.len()
        );
        ensure!(
            actual.len() <= actual.capacity(),
            "step {step}: len {} exceeds capacity {}",
            actual.len(),
            actual.capacity()
        );
    }

    stats.final_len = actual.len();
    stats.final_capacity = actual.capacity();
    Ok(stats)
}

pub fn run(ops: usize, seed: Option<u64>) -> Result<()> {
    let seed = seed.unwrap_or_else(|| fastrand::u64(..));
    log::info!("running {ops} operations with seed {seed}");

    let stats = execute(ops, seed)?;
    println!("seed:           {seed}");
    println!("pushes:         {}", stats.pushes);
    println!("inserts:        {}", stats.inserts);
    println!("erases:         {}", stats.erases);
    println!("pops:           {}", stats.pops);
    println!("resizes:        {}", stats.resizes);
    println!("lookups:        {}", stats.lookups);
    println!("rejected:       {}", stats.rejected);
    println!("reallocations:  {}", stats.reallocations);
    println!(
        "final:          len {}, capacity {}",
        stats.final_len, stats.final_capacity
    );
    Ok(())
}
