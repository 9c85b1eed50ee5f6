//! Implementation of the `forgeboard endpoint` command.

use crate::cli::{EndpointArgs, ResourceArg};
use forgeboard::config::Config;
use forgeboard::error::{ForgeError, Result};
use forgeboard::provider::{Endpoint, ProjectRef, Resource};

/// Execute the `forgeboard endpoint` command.
pub(super) fn cmd_endpoint(config: &Config, args: EndpointArgs) -> Result<()> {
    let endpoint = build_endpoint(&args)?;
    println!("{}", endpoint.url(args.provider, config.api_base(args.provider))?);
    Ok(())
}

pub(super) fn build_endpoint(args: &EndpointArgs) -> Result<Endpoint> {
    let number = || {
        args.number.ok_or_else(|| {
            ForgeError::UserError("--number is required for this resource".to_string())
        })
    };

    let resource = match args.resource {
        ResourceArg::Repos => return Ok(Endpoint::Repos),
        ResourceArg::Commits => Resource::Commits,
        ResourceArg::Commit => match &args.sha {
            Some(sha) => Resource::CommitDetail(sha.clone()),
            None => {
                return Err(ForgeError::UserError(
                    "--sha is required for 'commit'".to_string(),
                ));
            }
        },
        ResourceArg::ChangeRequests => Resource::ChangeRequests,
        ResourceArg::ChangeRequest => Resource::ChangeRequestDetail(number()?),
        ResourceArg::ChangeRequestFiles => Resource::ChangeRequestFiles(number()?),
        ResourceArg::Issues => Resource::Issues,
        ResourceArg::Issue => Resource::Issue(number()?),
        ResourceArg::Branches => Resource::Branches,
        ResourceArg::Contributors => Resource::Contributors,
    };

    let project = match &args.project {
        Some(full_name) => ProjectRef::parse(full_name)?,
        None => {
            return Err(ForgeError::UserError(
                "a project ('owner/name') is required for this resource".to_string(),
            ));
        }
    };

    Ok(Endpoint::Project(project, resource))
}
