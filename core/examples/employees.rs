use relq_core::{
    algebra,
    expression::{Join, Project, RelationRef},
    Condition, Database, Error, Expression, Operator, Value,
};

fn row(values: &[&str]) -> Vec<Value> {
    values.iter().map(|v| Value::parse(v)).collect()
}

fn main() -> Result<(), Error> {
    let mut company = Database::new();
    company.define(
        "Employees",
        vec!["EID", "Name", "Age"],
        vec![
            row(&["E1", "John", "32"]),
            row(&["E2", "Alice", "28"]),
            row(&["E3", "Bob", "29"]),
        ],
    )?;
    company.define(
        "Departments",
        vec!["DID", "EID", "DeptName"],
        vec![row(&["D1", "E1", "HR"]), row(&["D2", "E2", "IT"])],
    )?;

    // queries from text
    for outcome in relq_core::run(
        &company,
        vec![
            "select Age > 30 (Employees)",
            "project Name (select Age < 30 (Employees))",
            "select Salary > 10 (Employees)",
        ],
    ) {
        match outcome.result() {
            Ok(relation) => println!(
                "{}: {} -> {} tuple(s)",
                outcome.index(),
                outcome.query(),
                relation.len()
            ),
            Err(error) => println!("{}: {} -> {}", outcome.index(), outcome.query(), error),
        }
    }

    // the same engine, built by hand
    let staff: Expression = Project::new(
        vec!["Name".to_string(), "DeptName".to_string()],
        Join::new(
            RelationRef::new("Employees"),
            RelationRef::new("Departments"),
        ),
    )
    .into();
    let result = company.evaluate(&staff)?;
    println!("{}", staff);
    for tuple in result.tuples().iter() {
        println!("  {}", tuple);
    }

    // or straight on relations
    let employees = company.lookup("Employees")?;
    let condition = Condition::new("Age", Operator::GreaterOrEqual, Value::parse("29"));
    let seniors = algebra::select(employees, &condition)?;
    println!("seniors: {}", seniors.len());

    Ok(())
}
