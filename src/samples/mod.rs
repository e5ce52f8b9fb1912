//! Sample plumbing: bootstrap, output helpers, and the sample runner.
//!
//! Every sample binary follows the same linear flow:
//!
//! 1. parse flags ([`Cli`])
//! 2. load the config directory ([`SamplesConfig::load`])
//! 3. resolve the endpoint ([`Endpoint::resolve`])
//! 4. build the transport and authenticate ([`Authenticator`])
//! 5. discover the merchant account ([`ContentSample::discover`])
//! 6. run the sample ([`Sample::execute`]) and print to stdout
//!
//! Output is written to any [`Write`] so the samples can be exercised
//! against a buffer.

pub mod accounts;
pub mod datafeeds;
pub mod products;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

use crate::auth::Authenticator;
use crate::cli::{BaseArgs, Cli};
use crate::clients::{create_transport, HttpClient, HttpError};
use crate::config::{Endpoint, MerchantId, SamplesConfig, ENDPOINT_ENV_VAR};
use crate::content::{ContentService, ListCall, ListResponse, Warning};
use crate::error::SampleError;

/// A runnable sample.
#[allow(async_fn_in_trait)]
pub trait Sample {
    /// Flags the sample accepts in addition to [`BaseArgs`].
    type Args: clap::Args + std::fmt::Debug;

    /// Runs the sample against an initialized context.
    async fn execute<W: Write>(
        ctx: &ContentSample,
        args: &Self::Args,
        out: &mut W,
    ) -> Result<(), SampleError>;
}

/// State shared by the Content API samples once startup has finished.
#[derive(Debug)]
pub struct ContentSample {
    config: SamplesConfig,
    service: ContentService,
    merchant_id: MerchantId,
    is_mca: bool,
    website_url: Option<String>,
}

impl ContentSample {
    /// Runs the startup sequence up to and including account discovery.
    ///
    /// The config directory and the endpoint override are validated before
    /// any network traffic.
    ///
    /// # Errors
    ///
    /// Returns a [`SampleError`] for any configuration, transport,
    /// authentication, or discovery failure.
    pub async fn bootstrap<W: Write>(
        args: &BaseArgs,
        endpoint_override: Option<&str>,
        out: &mut W,
    ) -> Result<Self, SampleError> {
        let config = SamplesConfig::load(args.config_dir()?)?;
        let endpoint = Endpoint::resolve(endpoint_override)?;

        let transport = create_transport().map_err(SampleError::Transport)?;
        let authenticator = Authenticator::load(&config.content_dir(), transport.clone())?;
        authenticator.authenticate().await?;

        if let Some(url) = endpoint.override_url() {
            tracing::warn!(url, "using endpoint override from {ENDPOINT_ENV_VAR}");
            writeln!(out, "Using non-standard API endpoint: {url}")?;
        }

        let service = ContentService::new(HttpClient::new(transport, endpoint, authenticator));
        Self::discover(config, service, out).await
    }

    /// Determines which Merchant Center account to use and what kind it is.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::NoMerchantAccess`] if no merchant ID is
    /// configured and the user has no accounts, or the [`HttpError`] of a
    /// failed lookup.
    pub async fn discover<W: Write>(
        config: SamplesConfig,
        service: ContentService,
        out: &mut W,
    ) -> Result<Self, SampleError> {
        writeln!(out, "Retrieving information for authenticated user.")?;
        let authinfo = service.authinfo().await?;

        let merchant_id = if let Some(id) = config.merchant_id() {
            id
        } else {
            let id = authinfo
                .account_identifiers
                .iter()
                .find_map(|account| account.merchant_id.or(account.aggregator_id))
                .ok_or(SampleError::NoMerchantAccess)?;
            writeln!(out, "Using Merchant Center {id} for running samples.")?;
            id
        };

        let is_mca = authinfo
            .account_identifiers
            .iter()
            .any(|account| {
                account.aggregator_id == Some(merchant_id) && account.merchant_id.is_none()
            });
        writeln!(
            out,
            "Merchant Center {merchant_id} is{} an MCA.",
            if is_mca { "" } else { " not" }
        )?;

        let account = service.get_account(merchant_id, merchant_id).await?;
        match &account.website_url {
            Some(url) => writeln!(out, "Website for Merchant Center {merchant_id}: {url}")?,
            None => writeln!(out, "No website listed for this Merchant Center account.")?,
        }

        Ok(Self {
            config,
            service,
            merchant_id,
            is_mca,
            website_url: account.website_url,
        })
    }

    /// Returns the loaded configuration.
    #[must_use]
    pub const fn config(&self) -> &SamplesConfig {
        &self.config
    }

    /// Returns the Content API client.
    #[must_use]
    pub const fn service(&self) -> &ContentService {
        &self.service
    }

    /// Returns the merchant ID samples operate on.
    #[must_use]
    pub const fn merchant_id(&self) -> MerchantId {
        self.merchant_id
    }

    /// Returns `true` if the merchant is a multi-client account.
    #[must_use]
    pub const fn is_mca(&self) -> bool {
        self.is_mca
    }

    /// Returns the website registered for the merchant, if any.
    #[must_use]
    pub fn website_url(&self) -> Option<&str> {
        self.website_url.as_deref()
    }

    /// Fails unless the merchant is a multi-client account.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::AccountKind`] for a standalone account.
    pub fn check_mca(&self) -> Result<(), SampleError> {
        if self.is_mca {
            return Ok(());
        }
        Err(SampleError::AccountKind {
            merchant_id: self.merchant_id,
            requirement: "requires an MCA account",
            actual: "is not an MCA",
        })
    }

    /// Fails if the merchant is a multi-client account.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::AccountKind`] for an MCA.
    pub fn check_non_mca(&self) -> Result<(), SampleError> {
        if !self.is_mca {
            return Ok(());
        }
        Err(SampleError::AccountKind {
            merchant_id: self.merchant_id,
            requirement: "requires a non-MCA account",
            actual: "is an MCA",
        })
    }
}

/// Entry point shared by the sample binaries.
///
/// Parses flags (exiting 0 on `--help`), runs the sample with stdout as
/// output, and maps fatal errors to a non-zero exit code.
pub async fn run_main<S: Sample>() -> ExitCode {
    crate::logging::init();
    let cli = Cli::<S::Args>::parse();
    let override_url = std::env::var(ENDPOINT_ENV_VAR).ok();

    let mut out = std::io::stdout().lock();
    match run::<S, _>(&cli, override_url.as_deref(), &mut out).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::debug!(?error, "sample failed");
            if let Err(io_error) = print_error_chain(&mut std::io::stderr().lock(), &error) {
                tracing::debug!(%io_error, "could not report error");
            }
            ExitCode::FAILURE
        }
    }
}

/// Prints a fatal error followed by one `caused by` line per source.
///
/// # Errors
///
/// Returns an I/O error if printing fails.
pub fn print_error_chain<W: Write>(
    out: &mut W,
    error: &(dyn std::error::Error + 'static),
) -> std::io::Result<()> {
    writeln!(out, "Error: {error}")?;
    let mut source = error.source();
    while let Some(cause) = source {
        writeln!(out, "  caused by: {cause}")?;
        source = cause.source();
    }
    Ok(())
}

/// Bootstraps and runs sample `S`.
///
/// Structured 4xx API errors raised by the sample are printed and
/// swallowed; everything else is returned.
///
/// # Errors
///
/// Returns any fatal [`SampleError`].
pub async fn run<S: Sample, W: Write>(
    cli: &Cli<S::Args>,
    endpoint_override: Option<&str>,
    out: &mut W,
) -> Result<(), SampleError> {
    let ctx = ContentSample::bootstrap(&cli.base, endpoint_override, out).await?;
    execute_checked::<S, W>(&ctx, &cli.sample, out).await
}

/// Runs sample `S` against `ctx`, applying [`check_json_error`].
///
/// # Errors
///
/// Returns any [`SampleError`] other than a structured 4xx API error.
pub async fn execute_checked<S: Sample, W: Write>(
    ctx: &ContentSample,
    args: &S::Args,
    out: &mut W,
) -> Result<(), SampleError> {
    match S::execute(ctx, args, out).await {
        Err(SampleError::Http(error)) => check_json_error(error, out),
        other => other,
    }
}

/// Prints a structured 4xx API error and recovers from it.
///
/// Prints `There are <k> error(s)` followed by one `- [reason] message`
/// line per entry. Errors outside the 4xx range, without a JSON body, or
/// not from the API at all are returned unchanged.
///
/// # Errors
///
/// Returns `error` itself when it is not a recoverable API error, or an
/// I/O error if printing fails.
pub fn check_json_error<W: Write>(error: HttpError, out: &mut W) -> Result<(), SampleError> {
    let details = match &error {
        HttpError::Response(response) => response.client_error_details(),
        _ => None,
    };
    let Some(details) = details else {
        return Err(error.into());
    };

    writeln!(out, "There are {} error(s)", details.errors.len())?;
    for info in &details.errors {
        writeln!(
            out,
            "- [{}] {}",
            display(info.reason.as_ref()),
            display(info.message.as_ref())
        )?;
    }
    Ok(())
}

/// Prints the warnings attached to an item, each line prefixed by `prefix`.
///
/// Nothing is printed when there are no warnings.
///
/// # Errors
///
/// Returns an I/O error if printing fails.
pub fn print_warnings<W: Write>(
    out: &mut W,
    warnings: Option<&[Warning]>,
    prefix: &str,
) -> std::io::Result<()> {
    let Some(warnings) = warnings.filter(|w| !w.is_empty()) else {
        return Ok(());
    };
    writeln!(out, "{prefix}There are {} warning(s):", warnings.len())?;
    for warning in warnings {
        writeln!(
            out,
            "{prefix}- [{}] {}",
            display(warning.reason.as_ref()),
            display(warning.message.as_ref())
        )?;
    }
    Ok(())
}

/// Walks every page of `call`, printing each item with `print_item`.
///
/// If a page has no items, `empty_message` is printed and iteration stops.
/// Otherwise the next page is requested while a continuation token is
/// present. Returns the number of items printed.
///
/// # Errors
///
/// Returns the first request or output failure; later pages are not
/// requested.
pub async fn list_all<R, W, F>(
    mut call: ListCall<'_, R>,
    out: &mut W,
    empty_message: &str,
    mut print_item: F,
) -> Result<usize, SampleError>
where
    R: ListResponse,
    W: Write,
    F: FnMut(&mut W, &R::Item) -> std::io::Result<()>,
{
    let mut printed = 0;
    loop {
        let page = call.execute().await?.into_page();
        if page.items.is_empty() {
            writeln!(out, "{empty_message}")?;
            return Ok(printed);
        }

        for item in &page.items {
            print_item(out, item)?;
        }
        printed += page.items.len();

        match page.next_page_token {
            Some(token) => {
                tracing::debug!(%token, "fetching next page");
                call.set_page_token(token);
            }
            None => return Ok(printed),
        }
    }
}

/// Renders an optional API field for display.
pub(crate) fn display(value: Option<&String>) -> &str {
    value.map_or("(none)", String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_check_json_error_prints_each_entry() {
        let body = r#"{"error": {"code": 400, "message": "bad", "errors": [
            {"reason": "invalid", "message": "Invalid offerId"},
            {"reason": "required", "message": "Missing title"},
            {"reason": "duplicate", "message": "Duplicate item"}
        ]}}"#;
        let error = HttpError::Response(HttpResponseError::from_body(400, body));
        let mut out = Vec::new();

        check_json_error(error, &mut out).unwrap();

        let text = output(out);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "There are 3 error(s)");
        assert_eq!(lines[1], "- [invalid] Invalid offerId");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_check_json_error_propagates_server_errors() {
        let body = r#"{"error": {"code": 500, "message": "Backend Error", "errors": [
            {"reason": "backendError", "message": "Backend Error"}
        ]}}"#;
        let error = HttpError::Response(HttpResponseError::from_body(500, body));
        let mut out = Vec::new();

        let result = check_json_error(error, &mut out);

        assert!(matches!(
            result,
            Err(SampleError::Http(HttpError::Response(HttpResponseError { code: 500, .. })))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_check_json_error_propagates_non_json_client_errors() {
        let error = HttpError::Response(HttpResponseError::from_body(403, "Forbidden"));
        let mut out = Vec::new();

        let result = check_json_error(error, &mut out);

        assert!(matches!(result, Err(SampleError::Http(_))));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_check_json_error_propagates_network_errors() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());
        drop(listener);
        let source = reqwest::Client::new().get(&url).send().await.unwrap_err();
        let mut out = Vec::new();

        let result = check_json_error(HttpError::Network(source), &mut out);

        assert!(matches!(result, Err(SampleError::Http(HttpError::Network(_)))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_check_json_error_propagates_decode_errors() {
        let source = serde_json::from_str::<u8>("not json").unwrap_err();
        let error = HttpError::Decode {
            path: "1/products".to_string(),
            source,
        };
        let mut out = Vec::new();

        let result = check_json_error(error, &mut out);

        assert!(matches!(result, Err(SampleError::Http(HttpError::Decode { .. }))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_print_error_chain_reports_each_cause_once() {
        let error = SampleError::Auth(crate::auth::AuthError::CredentialFile {
            path: "/cfg/content/service-account.json".into(),
            reason: "missing field `private_key`".to_string(),
        });
        let mut out = Vec::new();

        print_error_chain(&mut out, &error).unwrap();

        let text = output(out);
        assert_eq!(text.matches("missing field `private_key`").count(), 1);
        assert!(text.starts_with("Error: Invalid credential file"));
    }

    #[test]
    fn test_print_warnings_with_prefix() {
        let warnings = vec![Warning {
            domain: None,
            reason: Some("validation".to_string()),
            message: Some("missing gtin".to_string()),
        }];
        let mut out = Vec::new();

        print_warnings(&mut out, Some(warnings.as_slice()), "  ").unwrap();

        assert_eq!(
            output(out),
            "  There are 1 warning(s):\n  - [validation] missing gtin\n"
        );
    }

    #[test]
    fn test_print_warnings_silent_without_warnings() {
        let mut out = Vec::new();
        print_warnings(&mut out, None, "  ").unwrap();
        print_warnings(&mut out, Some(&[][..]), "  ").unwrap();
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_bootstrap_fails_on_missing_config_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let args = BaseArgs {
            config_path: Some(dir.path().join("missing")),
        };
        let mut out = Vec::new();

        let result = ContentSample::bootstrap(&args, None, &mut out).await;

        assert!(matches!(
            result,
            Err(SampleError::Config(crate::ConfigError::MissingDirectory { .. }))
        ));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_bootstrap_rejects_relative_endpoint_before_auth() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("content")).unwrap();
        let args = BaseArgs {
            config_path: Some(dir.path().to_path_buf()),
        };
        let mut out = Vec::new();

        // No credential files exist, so reaching authentication would fail
        // with an auth error instead.
        let result = ContentSample::bootstrap(&args, Some("content/v2.1"), &mut out).await;

        assert!(matches!(
            result,
            Err(SampleError::Config(crate::ConfigError::InvalidEndpoint { .. }))
        ));
    }
}
