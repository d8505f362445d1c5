use anyhow::Result;
use simplevec::SimpleVec;

/// Appends `count` values and returns `(len, capacity)` after every append
/// that changed the capacity.
pub fn capacity_steps(count: usize) -> Vec<(usize, usize)> {
    let mut values = SimpleVec::new();
    let mut steps = Vec::new();
    for i in 0..count {
        let before = values.capacity();
        values.push_back(i as u64);
        if values.capacity() != before {
            steps.push((values.len(), values.capacity()));
        }
    }
    steps
}

pub fn run(count: usize) -> Result<()> {
    let steps = capacity_steps(count);
    println!("{:>12} {:>12}", "len", "capacity");
    for (len, capacity) in &steps {
        println!("{len:>12} {capacity:>12}");
    }
    println!("{count} appends, {} reallocations", steps.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_steps_double() {
        assert_eq!(
            capacity_steps(9),
            vec![(1, 1), (2, 2), (3, 4), (5, 8), (9, 16)]
        );
        assert!(capacity_steps(0).is_empty());
    }
}
