//! Query dispatch
//!
//! Each command produces the lines to print on stdout, or the error to
//! report. Nothing here writes to the terminal.

use unitconv::{Error, Unitconv};

use crate::config::Command;

pub fn run(uc: &Unitconv, command: &Command, precision: usize) -> Result<Vec<String>, Error> {
    match command {
        Command::Convert { amount, from, to } => {
            let conversion = uc.convert_and_record(amount, from, to)?;
            Ok(vec![conversion.format_with(precision)])
        }

        Command::Categories => Ok(numbered(uc.units().categories())),

        Command::Units { category } => {
            let units = uc.units().units_in(category)?;
            Ok(numbered(units.iter().map(|u| u.to_string())))
        }

        Command::Groups => Ok(numbered(uc.constants().groups())),

        Command::Constants { group: Some(group) } => {
            let constants = uc.constants().list_in(group)?;
            Ok(numbered(constants.iter().map(|c| format!("{} ({})", c.name, c.symbol))))
        }

        Command::Constants { group: None } => Ok(uc
            .constants()
            .all()
            .iter()
            .map(|c| format!("{:<12} {} ({})", c.group, c.name, c.symbol))
            .collect()),

        Command::Constant { name } => {
            let value = uc.constants().value_of(name)?;
            Ok(vec![value.to_string()])
        }

        Command::ConstantDetail { name } => {
            let constant = uc.constants().detail(name)?;
            Ok(vec![constant.to_string()])
        }

        Command::History => {
            let Some(log) = uc.history() else {
                return Ok(Vec::new());
            };
            Ok(log
                .entries()?
                .iter()
                .map(|e| {
                    format!(
                        "{:<4} {} {} {} -> {} {}",
                        e.seq,
                        e.timestamp.format("%Y-%m-%d %H:%M:%S"),
                        e.amount,
                        e.from,
                        e.to,
                        e.result
                    )
                })
                .collect())
        }
    }
}

fn numbered<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| format!("{:<3} {}", idx + 1, item.as_ref()))
        .collect()
}
