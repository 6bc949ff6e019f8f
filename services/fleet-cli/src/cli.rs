//! Command-line argument parsing
//!
//! `fleet-cli [--config PATH] <orders|vehicles|drivers|state-logs>
//!  --company ID [--company ID ...] [--status active|inactive]
//!  [--offset N] [--limit N] [--start TS] [--end TS]`

use anyhow::{Context, Result, anyhow, bail};
use fleet_client::PortalStatus;

const DEFAULT_LIMIT: u32 = 100;

pub const USAGE: &str = "usage: fleet-cli [--config PATH] <orders|vehicles|drivers|state-logs> \
--company ID [--company ID ...] [--status active|inactive] [--offset N] [--limit N] \
[--start TS] [--end TS]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Orders,
    Vehicles,
    Drivers,
    StateLogs,
}

impl Resource {
    fn parse(name: &str) -> Result<Self> {
        match name {
            "orders" => Ok(Resource::Orders),
            "vehicles" => Ok(Resource::Vehicles),
            "drivers" => Ok(Resource::Drivers),
            "state-logs" => Ok(Resource::StateLogs),
            other => bail!("unknown resource {other:?}\n{USAGE}"),
        }
    }
}

/// One parsed invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub config: Option<String>,
    pub resource: Resource,
    pub company_ids: Vec<i64>,
    pub status: PortalStatus,
    pub offset: u32,
    pub limit: u32,
    pub start_ts: Option<i64>,
    pub end_ts: Option<i64>,
}

impl Command {
    /// The single company for per-company resources.
    pub fn company_id(&self) -> Result<i64> {
        match self.company_ids.as_slice() {
            [id] => Ok(*id),
            _ => bail!("{:?} takes exactly one --company", self.resource),
        }
    }
}

/// Parse arguments (without the program name).
pub fn parse(args: &[String]) -> Result<Command> {
    let mut config = None;
    let mut resource = None;
    let mut company_ids = Vec::new();
    let mut status = PortalStatus::Active;
    let mut offset = 0;
    let mut limit = DEFAULT_LIMIT;
    let mut start_ts = None;
    let mut end_ts = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = || {
            iter.next()
                .map(String::as_str)
                .ok_or_else(|| anyhow!("{arg} requires a value"))
        };
        match arg.as_str() {
            "--config" => config = Some(value()?.to_string()),
            "--company" => company_ids.push(number(arg, value()?)?),
            "--status" => status = value()?.parse().map_err(|e: String| anyhow!(e))?,
            "--offset" => offset = number(arg, value()?)?,
            "--limit" => limit = number(arg, value()?)?,
            "--start" => start_ts = Some(number(arg, value()?)?),
            "--end" => end_ts = Some(number(arg, value()?)?),
            flag if flag.starts_with("--") => bail!("unknown flag {flag}\n{USAGE}"),
            name if resource.is_none() => resource = Some(Resource::parse(name)?),
            extra => bail!("unexpected argument {extra:?}\n{USAGE}"),
        }
    }

    let resource = resource.ok_or_else(|| anyhow!("missing resource\n{USAGE}"))?;
    if company_ids.is_empty() {
        bail!("at least one --company is required\n{USAGE}");
    }

    Ok(Command {
        config,
        resource,
        company_ids,
        status,
        offset,
        limit,
        start_ts,
        end_ts,
    })
}

fn number<T: std::str::FromStr>(flag: &str, raw: &str) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.parse()
        .with_context(|| format!("{flag} expects a number, got {raw:?}"))
}
