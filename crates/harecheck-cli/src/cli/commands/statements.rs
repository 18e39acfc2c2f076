use harecheck_core::statements::STATEMENTS;

pub fn execute() -> anyhow::Result<i32> {
    for (i, statement) in STATEMENTS.iter().enumerate() {
        println!("{:2}. {}", i + 1, statement);
    }
    Ok(0)
}
