//! Organization member command handlers

use futures::TryStreamExt;
use log::debug;

use crate::github::helpers::{collect_org_results, fetch_from_organizations, log_completion};
use crate::github::GhClient;
use crate::output::output_members;
use crate::ui::{confirm_action, create_spinner, finish_spinner, finish_spinner_with_status};
use crate::{Cli, Command};

use super::models::{Member, MemberOptions};

type CommandResult<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Run the list command
pub async fn run_list_command(client: &GhClient, cli: &Cli) -> CommandResult<()> {
    let Command::List(args) = &cli.command else {
        unreachable!()
    };

    let options = args.options();
    let all_pages = args.all_pages;

    let spinner = create_spinner(
        &format!("Fetching members from {} organization(s)...", args.orgs.len()),
        cli.batch,
    );

    let results = fetch_from_organizations(args.orgs.clone(), |org| {
        let options = &options;
        async move {
            let members = client.members();
            let fetched = if all_pages {
                members.list_stream(&org, options).try_collect().await
            } else {
                members.list(&org, options).await
            };
            match fetched {
                Ok(list) => {
                    debug!("Found {} members in '{}'", list.len(), org);
                    let with_org: Vec<(String, Member)> =
                        list.into_iter().map(|m| (org.clone(), m)).collect();
                    Ok(with_org)
                }
                Err(e) => Err((org, e)),
            }
        }
    })
    .await;

    let (listed, failed) = collect_org_results(results, &spinner);
    finish_spinner_with_status(spinner, &listed, !failed.is_empty());

    let rows: Vec<(String, Member)> = listed.into_iter().flatten().collect();
    output_members(&rows, args.output, cli.no_header)?;

    log_completion(&failed);
    if !failed.is_empty() {
        return Err(format!("Members could not be listed for: {}", failed.join(", ")).into());
    }
    Ok(())
}

/// Run the check command
///
/// Returns whether the user is a member, so the caller can set the exit code.
pub async fn run_check_command(client: &GhClient, cli: &Cli) -> CommandResult<bool> {
    let Command::Check(args) = &cli.command else {
        unreachable!()
    };

    let options = MemberOptions::new().with_public(args.public);
    let spinner = create_spinner(
        &format!("Checking '{}' in '{}'...", args.user, args.org),
        cli.batch,
    );
    let result = client
        .members()
        .check_membership(&args.org, &args.user, &options)
        .await;
    finish_spinner(spinner);

    let is_member = result?;
    let scope = if args.public { "public member" } else { "member" };
    if is_member {
        println!("{} is a {} of {}", args.user, scope, args.org);
    } else {
        println!("{} is not a {} of {}", args.user, scope, args.org);
    }
    Ok(is_member)
}

/// Run the remove command
pub async fn run_remove_command(client: &GhClient, cli: &Cli) -> CommandResult<()> {
    let Command::Remove(args) = &cli.command else {
        unreachable!()
    };
    let target = &args.target;

    let prompt = format!(
        "Remove '{}' from organization '{}'? This also removes them from all teams.",
        target.user, target.org
    );
    if !confirm_action(&prompt, args.yes || cli.batch)? {
        println!("Aborted");
        return Ok(());
    }

    let response = client
        .members()
        .remove_member(&target.org, &target.user, &MemberOptions::new())
        .await?;
    debug!("Remove answered with status {}", response.status);

    println!("Removed '{}' from '{}'", target.user, target.org);
    Ok(())
}

/// Run the publicize command
pub async fn run_publicize_command(client: &GhClient, cli: &Cli) -> CommandResult<()> {
    let Command::Publicize(target) = &cli.command else {
        unreachable!()
    };

    let response = client
        .members()
        .publicize_membership(&target.org, &target.user, &MemberOptions::new())
        .await?;
    debug!("Publicize answered with status {}", response.status);

    println!(
        "Membership of '{}' in '{}' is now public",
        target.user, target.org
    );
    Ok(())
}

/// Run the conceal command
pub async fn run_conceal_command(client: &GhClient, cli: &Cli) -> CommandResult<()> {
    let Command::Conceal(args) = &cli.command else {
        unreachable!()
    };
    let target = &args.target;

    let prompt = format!(
        "Conceal membership of '{}' in '{}'?",
        target.user, target.org
    );
    if !confirm_action(&prompt, args.yes || cli.batch)? {
        println!("Aborted");
        return Ok(());
    }

    let response = client
        .members()
        .conceal_membership(&target.org, &target.user, &MemberOptions::new())
        .await?;
    debug!("Conceal answered with status {}", response.status);

    println!(
        "Membership of '{}' in '{}' is now concealed",
        target.user, target.org
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["ghorg"];
        argv.extend_from_slice(args);
        argv.push("--batch");
        Cli::parse_from(argv)
    }

    #[tokio::test]
    async fn test_run_list_command_multiple_orgs() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/orgs/acme-corp/members"))
            .and(query_param("role", "admin"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"login": "alice", "id": 1}
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/orgs/globex/members"))
            .and(query_param("role", "admin"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"login": "hank", "id": 2}
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = GhClient::test_client(&mock_server.uri());
        let cli = cli(&["list", "acme-corp", "globex", "--role", "admin", "-o", "json"]);

        run_list_command(&client, &cli).await.unwrap();
    }

    #[tokio::test]
    async fn test_run_list_command_reports_failed_org() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/orgs/acme-corp/members"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/orgs/ghost/members"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = GhClient::test_client(&mock_server.uri());
        let cli = cli(&["list", "acme-corp", "ghost"]);

        let err = run_list_command(&client, &cli).await.unwrap_err();
        assert_eq!(err.to_string(), "Members could not be listed for: ghost");
    }

    #[tokio::test]
    async fn test_run_list_command_all_pages() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/orgs/acme-corp/public_members"))
            .and(query_param("per_page", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"login": "alice", "id": 1}
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = GhClient::test_client(&mock_server.uri());
        let cli = cli(&["list", "acme-corp", "--public", "--all-pages"]);

        run_list_command(&client, &cli).await.unwrap();
    }

    #[tokio::test]
    async fn test_run_check_command() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/orgs/acme-corp/members/alice"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/orgs/acme-corp/members/mallory"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = GhClient::test_client(&mock_server.uri());

        assert!(run_check_command(&client, &cli(&["check", "acme-corp", "alice"]))
            .await
            .unwrap());
        assert!(
            !run_check_command(&client, &cli(&["check", "acme-corp", "mallory"]))
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_run_check_command_propagates_auth_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/orgs/acme-corp/members/alice"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "message": "Bad credentials"
            })))
            .mount(&mock_server)
            .await;

        let client = GhClient::test_client(&mock_server.uri());
        let err = run_check_command(&client, &cli(&["check", "acme-corp", "alice"]))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Bad credentials"));
    }

    #[tokio::test]
    async fn test_run_mutating_commands() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/orgs/acme-corp/members/alice"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("PUT"))
            .and(path("/orgs/acme-corp/public_members/bob"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/orgs/acme-corp/public_members/bob"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = GhClient::test_client(&mock_server.uri());

        run_remove_command(&client, &cli(&["remove", "acme-corp", "alice"]))
            .await
            .unwrap();
        run_publicize_command(&client, &cli(&["publicize", "acme-corp", "bob"]))
            .await
            .unwrap();
        run_conceal_command(&client, &cli(&["conceal", "acme-corp", "bob"]))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_run_remove_command_validation_happens_before_io() {
        let mock_server = MockServer::start().await;
        let client = GhClient::test_client(&mock_server.uri());

        let err = run_remove_command(&client, &cli(&["remove", "acme-corp", ""]))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("member name is required"));

        let requests = mock_server.received_requests().await.unwrap();
        assert!(requests.is_empty());
    }
}
