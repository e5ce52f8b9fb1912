//! Datafeed samples.

use std::io::{self, Write};

use crate::cli::NoArgs;
use crate::content::Datafeed;
use crate::error::SampleError;
use crate::samples::{display, list_all, ContentSample, Sample};

/// Prints every datafeed of the merchant.
#[derive(Debug)]
pub struct DatafeedsList;

impl Sample for DatafeedsList {
    type Args = NoArgs;

    async fn execute<W: Write>(
        ctx: &ContentSample,
        _args: &NoArgs,
        out: &mut W,
    ) -> Result<(), SampleError> {
        ctx.check_non_mca()?;

        let call = ctx.service().list_datafeeds(ctx.merchant_id());
        list_all(call, out, "No datafeeds found.", print_datafeed).await?;
        Ok(())
    }
}

/// Prints a datafeed header line and its file details.
///
/// # Errors
///
/// Returns an I/O error if printing fails.
pub fn print_datafeed<W: Write>(out: &mut W, feed: &Datafeed) -> io::Result<()> {
    writeln!(
        out,
        "Datafeed {} ({}):",
        display(feed.id.as_ref()),
        display(feed.name.as_ref())
    )?;
    writeln!(out, "  - File name: {}", display(feed.file_name.as_ref()))?;
    writeln!(out, "  - Content type: {}", display(feed.content_type.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_datafeed() {
        let feed = Datafeed {
            id: Some("42".to_string()),
            name: Some("Primary feed".to_string()),
            file_name: Some("feed.xml".to_string()),
            content_type: Some("products".to_string()),
        };
        let mut out = Vec::new();

        print_datafeed(&mut out, &feed).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Datafeed 42 (Primary feed):\n  - File name: feed.xml\n  - Content type: products\n"
        );
    }
}
