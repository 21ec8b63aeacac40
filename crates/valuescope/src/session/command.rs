//! Line commands of an interactive session.

use super::SessionError;
use std::str::FromStr;
use valuescope_data::StatementKind;
use valuescope_valuation::ValuationMethod;

/// One user action.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Look up a ticker and render the selected statements.
    Ticker(String),
    /// Replace the statement kinds to render.
    Show(Vec<StatementKind>),
    /// Make another valuation method active.
    Method(ValuationMethod),
    /// Set one input of the active method.
    Set {
        /// Field key, e.g. `growth_rate`.
        key: String,
        /// Entered value; percentages as entered.
        value: f64,
    },
    /// List the active method's inputs.
    Inputs,
    /// Evaluate the active method.
    Compute,
    /// List the ticker universe.
    Symbols,
    /// Print command help.
    Help,
    /// End the session.
    Quit,
}

impl Command {
    /// Usage text.
    pub const HELP: &'static str = "\
Commands:
  ticker <SYMBOL>             fetch and show statements for a listed symbol
  show <kind>... | all | none select statements to show (income, balance, cash, ratios)
  method ggm|dcf|peg          switch valuation method (clears inputs)
  set <field> <value>         set an input of the active method
  inputs                      list the active method's inputs
  compute                     compute the active valuation
  symbols                     list known symbols
  help                        show this help
  quit                        leave the session";
}

fn usage(text: &str) -> SessionError {
    SessionError::Usage(text.to_string())
}

impl FromStr for Command {
    type Err = SessionError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(usage("empty command"));
        };
        let args: Vec<&str> = words.collect();

        match (verb.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("ticker", [symbol]) => Ok(Self::Ticker((*symbol).to_string())),
            ("ticker", _) => Err(usage("ticker <SYMBOL>")),
            ("show", ["all"]) => Ok(Self::Show(StatementKind::all().to_vec())),
            ("show", ["none"]) => Ok(Self::Show(Vec::new())),
            ("show", []) => Err(usage("show <kind>... | all | none")),
            ("show", kinds) => {
                let mut selected = Vec::with_capacity(kinds.len());
                for kind in kinds {
                    let kind: StatementKind = kind.parse()?;
                    if !selected.contains(&kind) {
                        selected.push(kind);
                    }
                }
                Ok(Self::Show(selected))
            }
            ("method", [name]) => Ok(Self::Method(name.parse()?)),
            ("method", _) => Err(usage("method ggm|dcf|peg")),
            ("set", [key, value]) => {
                let value = value
                    .parse::<f64>()
                    .map_err(|_| usage(&format!("'{value}' is not a number")))?;
                Ok(Self::Set {
                    key: (*key).to_string(),
                    value,
                })
            }
            ("set", _) => Err(usage("set <field> <value>")),
            ("inputs", []) => Ok(Self::Inputs),
            ("compute", []) => Ok(Self::Compute),
            ("symbols", []) => Ok(Self::Symbols),
            ("help" | "?", _) => Ok(Self::Help),
            ("quit" | "exit", _) => Ok(Self::Quit),
            (other, _) => Err(SessionError::UnknownCommand(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ticker agp", Command::Ticker("agp".to_string()))]
    #[case("  METHOD dcf ", Command::Method(ValuationMethod::DiscountedCashFlow))]
    #[case("set growth_rate 5", Command::Set { key: "growth_rate".to_string(), value: 5.0 })]
    #[case("compute", Command::Compute)]
    #[case("inputs", Command::Inputs)]
    #[case("symbols", Command::Symbols)]
    #[case("exit", Command::Quit)]
    #[case("show none", Command::Show(vec![]))]
    fn test_parse(#[case] line: &str, #[case] expected: Command) {
        assert_eq!(line.parse::<Command>().unwrap(), expected);
    }

    #[test]
    fn test_show_kinds_dedup_in_order() {
        let command: Command = "show ratios income ratios".parse().unwrap();
        assert_eq!(
            command,
            Command::Show(vec![StatementKind::Ratios, StatementKind::IncomeStatement])
        );
    }

    #[test]
    fn test_show_all() {
        let command: Command = "show all".parse().unwrap();
        assert_eq!(command, Command::Show(StatementKind::all().to_vec()));
    }

    #[rstest]
    #[case("")]
    #[case("ticker")]
    #[case("ticker a b")]
    #[case("set growth_rate")]
    #[case("set growth_rate five")]
    #[case("method")]
    fn test_usage_errors(#[case] line: &str) {
        assert!(matches!(line.parse::<Command>(), Err(SessionError::Usage(_))));
    }

    #[test]
    fn test_unknown_parts() {
        assert!(matches!(
            "frobnicate".parse::<Command>(),
            Err(SessionError::UnknownCommand(_))
        ));
        assert!(matches!(
            "method capm".parse::<Command>(),
            Err(SessionError::Valuation(_))
        ));
        assert!(matches!(
            "show dividends".parse::<Command>(),
            Err(SessionError::Data(_))
        ));
    }
}
