//! Multi-client account samples.

use std::io::{self, Write};

use crate::cli::NoArgs;
use crate::content::Account;
use crate::error::SampleError;
use crate::samples::{display, list_all, ContentSample, Sample};

/// Prints the sub-accounts of an MCA.
#[derive(Debug)]
pub struct AccountsList;

impl Sample for AccountsList {
    type Args = NoArgs;

    async fn execute<W: Write>(
        ctx: &ContentSample,
        _args: &NoArgs,
        out: &mut W,
    ) -> Result<(), SampleError> {
        ctx.check_mca()?;

        let call = ctx.service().list_accounts(ctx.merchant_id());
        list_all(call, out, "No accounts found.", print_account).await?;
        Ok(())
    }
}

/// Prints `- <id> <name>`.
///
/// # Errors
///
/// Returns an I/O error if printing fails.
pub fn print_account<W: Write>(out: &mut W, account: &Account) -> io::Result<()> {
    let id = account
        .id
        .map_or_else(|| "(none)".to_string(), |id| id.to_string());
    writeln!(out, "- {id} {}", display(account.name.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MerchantId;

    #[test]
    fn test_print_account_omits_website() {
        let account = Account {
            id: MerchantId::new(7).ok(),
            name: Some("Sub shop".to_string()),
            website_url: Some("https://shop.example.com".to_string()),
        };
        let mut out = Vec::new();

        print_account(&mut out, &account).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "- 7 Sub shop\n");
    }

    #[test]
    fn test_print_account_missing_fields() {
        let account = Account {
            id: None,
            name: None,
            website_url: None,
        };
        let mut out = Vec::new();

        print_account(&mut out, &account).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "- (none) (none)\n");
    }
}
