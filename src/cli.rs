//! Command-line front end
//!
//! `theme_money [--format <template>] [--currency] <amount>...`

use crate::domain::Amount;
use crate::error::{AppError, AppResult};
use crate::formatter::MoneyFormatter;

/// Parsed command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Explicit template overriding the configured one
    pub template: Option<String>,

    /// Use the money-with-currency template
    pub currency: bool,

    /// Raw amounts, in minor units
    pub amounts: Vec<String>,
}

impl Invocation {
    /// Parse arguments (without the program name)
    pub fn parse<I, S>(args: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut invocation = Self::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--format" | "-f" => {
                    let template = args.next().ok_or_else(|| {
                        AppError::InvalidArguments(format!("{} needs a template", arg))
                    })?;
                    invocation.template = Some(template);
                }
                "--currency" | "-c" => invocation.currency = true,
                "--" => invocation.amounts.extend(args.by_ref()),
                flag if flag.starts_with("--") => {
                    return Err(AppError::InvalidArguments(format!("unknown flag {}", flag)));
                }
                _ => invocation.amounts.push(arg),
            }
        }

        if invocation.currency && invocation.template.is_some() {
            return Err(AppError::InvalidArguments(
                "--currency cannot be combined with --format".to_string(),
            ));
        }
        if invocation.amounts.is_empty() {
            return Err(AppError::InvalidArguments("no amount given".to_string()));
        }
        Ok(invocation)
    }

    /// Format every amount, one output line each
    pub fn run(&self, formatter: &MoneyFormatter) -> AppResult<Vec<String>> {
        self.amounts
            .iter()
            .map(|raw| {
                let amount = Amount::from(raw.as_str());
                if self.currency {
                    Ok(formatter.format_with_currency(amount))
                } else {
                    Ok(formatter.format(amount, self.template.as_deref())?)
                }
            })
            .collect()
    }
}
