//! Demonstration script.
//!
//! Writes to a generic sink so the exact transcript can be asserted in tests.

use std::io::Write;

use crate::compare::compare;
use crate::error::AppError;
use crate::models::Employee;

/// Run the fixed demonstration script.
///
/// Constructs three employees, prints their details, runs both traced
/// comparisons, then attempts an invalid construction. The validation
/// failure is caught here and printed; it is demonstration output, not a
/// program error.
pub fn run_fixed<W: Write>(out: &mut W) -> crate::Result<()> {
    match script(out) {
        Err(AppError::Validation(msg)) => {
            writeln!(out, "Validation Error: {}", msg)?;
            Ok(())
        }
        other => other,
    }
}

fn script<W: Write>(out: &mut W) -> crate::Result<()> {
    writeln!(out, "Creating and Comparing Employees:")?;
    writeln!(out)?;

    let employee1 = Employee::new(101, "Sarah", "Wilson")?;
    let employee2 = Employee::new(101, "Michael", "Brown")?;
    let employee3 = Employee::new(102, "Emma", "Davis")?;

    writeln!(out, "Employee Details:")?;
    writeln!(out, "{}", employee1)?;
    writeln!(out, "{}", employee2)?;
    writeln!(out, "{}", employee3)?;
    writeln!(out)?;

    writeln!(out, "Comparison Results:")?;
    writeln!(out, "Comparing employee1 and employee2:")?;
    let outcome = compare(Some(&employee1), Some(&employee2));
    writeln!(out, "{}", outcome)?;
    writeln!(out, "Result: {}", outcome.are_equal())?;
    writeln!(out)?;

    writeln!(out, "Comparing employee1 and employee3:")?;
    let outcome = compare(Some(&employee1), Some(&employee3));
    writeln!(out, "{}", outcome)?;
    // Inequality check: true when the IDs differ
    writeln!(out, "Result: {}", !outcome.are_equal())?;
    writeln!(out)?;

    writeln!(out, "Trying to create invalid employee:")?;
    let _invalid = Employee::new(-1, "Invalid", "Employee")?;

    Ok(())
}

/// Print details and pairwise traced comparisons for a loaded roster.
///
/// Pairs are compared in index order, each pair once.
pub fn run_roster<W: Write>(employees: &[Employee], out: &mut W) -> crate::Result<()> {
    writeln!(out, "Employee Details:")?;
    for employee in employees {
        writeln!(out, "{}", employee)?;
    }
    writeln!(out)?;

    writeln!(out, "Comparison Results:")?;
    for i in 0..employees.len() {
        for j in (i + 1)..employees.len() {
            writeln!(out, "Comparing employee{} and employee{}:", i + 1, j + 1)?;
            let outcome = compare(Some(&employees[i]), Some(&employees[j]));
            writeln!(out, "{}", outcome)?;
            writeln!(out, "Result: {}", outcome.are_equal())?;
            writeln!(out)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{run_fixed, run_roster};
    use crate::models::Employee;

    const FIXED_TRANSCRIPT: &str = "\
Creating and Comparing Employees:

Employee Details:
Employee(ID: 101, Full Name: Sarah Wilson)
Employee(ID: 101, Full Name: Michael Brown)
Employee(ID: 102, Full Name: Emma Davis)

Comparison Results:
Comparing employee1 and employee2:
Employees are equal (Same ID: 101)
Result: true

Comparing employee1 and employee3:
Employees are different (IDs: 101 vs 102)
Result: true

Trying to create invalid employee:
Validation Error: Employee ID must be a positive number.
";

    #[test]
    fn test_fixed_script_transcript() {
        let mut out = Vec::new();
        run_fixed(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), FIXED_TRANSCRIPT);
    }

    #[test]
    fn test_roster_pairwise_comparisons() {
        let employees = vec![
            Employee::new(1, "Ann", "Lee").unwrap(),
            Employee::new(2, "Ben", "Ray").unwrap(),
            Employee::new(1, "Cat", "Orr").unwrap(),
        ];

        let mut out = Vec::new();
        run_roster(&employees, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        // Three employees give three pairs
        assert_eq!(text.matches("Comparing employee").count(), 3);
        assert!(text.contains("Comparing employee1 and employee3:\nEmployees are equal (Same ID: 1)\nResult: true"));
        assert!(text.contains("Comparing employee1 and employee2:\nEmployees are different (IDs: 1 vs 2)\nResult: false"));
    }
}
