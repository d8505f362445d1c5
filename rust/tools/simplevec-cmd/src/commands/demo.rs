use anyhow::{Result, ensure};
use simplevec::SimpleVec;

pub fn run() -> Result<()> {
    let mut values = SimpleVec::new();
    values.push_back(10);
    values.push_back(20);
    println!("push_back(10), push_back(20) -> {values:?}");

    let at = values.insert(1, 15)?;
    println!("insert(1, 15) -> {values:?}, inserted at {at}");

    let at = values.erase(0)?;
    println!("erase(0) -> {values:?}, next element at {at}");

    match values.at(5) {
        Ok(value) => println!("at(5) -> {value}"),
        Err(e) => println!("at(5) -> error: {e}"),
    }

    ensure!(values.as_slice() == [15, 20], "unexpected contents {values:?}");
    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_demo_runs() {
        super::run().unwrap();
    }
}
