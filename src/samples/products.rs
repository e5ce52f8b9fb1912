//! Product samples.

use std::io::{self, Write};

use crate::cli::{NoArgs, ProductArgs};
use crate::content::Product;
use crate::error::SampleError;
use crate::samples::{display, list_all, print_warnings, ContentSample, Sample};

/// Prints every product of the merchant.
#[derive(Debug)]
pub struct ProductsList;

impl Sample for ProductsList {
    type Args = NoArgs;

    async fn execute<W: Write>(
        ctx: &ContentSample,
        _args: &NoArgs,
        out: &mut W,
    ) -> Result<(), SampleError> {
        ctx.check_non_mca()?;

        let call = ctx.service().list_products(ctx.merchant_id());
        let count = list_all(call, out, "No products found.", print_product).await?;
        tracing::info!(count, "listed products");
        Ok(())
    }
}

/// Prints a single product looked up by REST ID.
#[derive(Debug)]
pub struct ProductsGet;

impl Sample for ProductsGet {
    type Args = ProductArgs;

    async fn execute<W: Write>(
        ctx: &ContentSample,
        args: &ProductArgs,
        out: &mut W,
    ) -> Result<(), SampleError> {
        ctx.check_non_mca()?;

        let product = ctx
            .service()
            .get_product(ctx.merchant_id(), &args.product_id)
            .await?;
        print_product(out, &product)?;
        Ok(())
    }
}

/// Prints `- <id> <title>` followed by any warnings, indented.
///
/// # Errors
///
/// Returns an I/O error if printing fails.
pub fn print_product<W: Write>(out: &mut W, product: &Product) -> io::Result<()> {
    writeln!(
        out,
        "- {} {}",
        display(product.id.as_ref()),
        display(product.title.as_ref())
    )?;
    print_warnings(out, product.warnings.as_deref(), "  ")
}
