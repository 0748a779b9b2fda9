//! Operator listings for the `operators` command

use crate::{Dialect, ibm, jsonlogic};

/// Render the operator table of one dialect, or of both when `dialect` is `None`
pub fn operators_overview(dialect: Option<Dialect>) -> String {
    let dialects = match dialect {
        Some(d) => vec![d],
        None => Dialect::ALL.to_vec(),
    };

    dialects
        .into_iter()
        .map(|d| {
            let (title, operators) = match d {
                Dialect::Ibm => ("IBM OPERATORS", ibm::OPERATORS),
                Dialect::JsonLogic => ("JSONLOGIC OPERATORS", jsonlogic::OPERATORS),
            };
            let mut section = format!("{}\n\n", title);
            for (name, description) in operators {
                section.push_str(&format!("  {:<8}{}\n", name, description));
            }
            section
        })
        .collect::<Vec<_>>()
        .join("\n")
}
