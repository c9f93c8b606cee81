//! Listing members across several organizations at once

use futures::future::join_all;
use indicatif::ProgressBar;
use std::future::Future;

use crate::GhError;

/// Outcome of one organization's listing: its rows, or the org and its error
pub type OrgListing<T> = Result<T, (String, GhError)>;

/// Run `fetcher` for every organization concurrently
///
/// Results come back in the order the organizations were given.
pub async fn fetch_from_organizations<T, F, Fut>(
    organizations: Vec<String>,
    fetcher: F,
) -> Vec<OrgListing<T>>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = OrgListing<T>>,
{
    join_all(organizations.into_iter().map(fetcher)).await
}

/// Split listings into what succeeded and the organizations that failed
///
/// Each failure is reported on stderr as it is found, above the spinner when
/// one is running.
pub fn collect_org_results<T>(
    results: Vec<OrgListing<T>>,
    spinner: &Option<ProgressBar>,
) -> (Vec<T>, Vec<String>) {
    let mut listed = Vec::new();
    let mut failed = Vec::new();

    for result in results {
        match result {
            Ok(data) => listed.push(data),
            Err((org, e)) => {
                let msg = failure_message(&org, &e);
                match spinner {
                    Some(s) => s.suspend(|| eprintln!("{}", msg)),
                    None => eprintln!("{}", msg),
                }
                failed.push(org);
            }
        }
    }

    (listed, failed)
}

fn failure_message(org: &str, err: &GhError) -> String {
    if err.is_not_found() {
        format!(
            "Could not list members of '{}': organization not found or not visible with the current token\n  {}\n",
            org, err
        )
    } else {
        format!("Could not list members of '{}':\n  {}\n", org, err)
    }
}

/// Log how the listing ended
pub fn log_completion(failed: &[String]) {
    if failed.is_empty() {
        log::info!("Listed members of every organization");
    } else {
        log::info!("Listing failed for: {}", failed.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found(org: &str) -> GhError {
        GhError::NotFound {
            message: format!("/orgs/{}/members", org),
        }
    }

    #[test]
    fn test_collect_org_results_all_success() {
        let results: Vec<OrgListing<i32>> = vec![Ok(1), Ok(2), Ok(3)];
        let (listed, failed) = collect_org_results(results, &None);
        assert_eq!(listed, vec![1, 2, 3]);
        assert!(failed.is_empty());
    }

    #[test]
    fn test_collect_org_results_names_failed_orgs() {
        let results: Vec<OrgListing<i32>> = vec![
            Ok(1),
            Err(("ghost".to_string(), not_found("ghost"))),
            Ok(3),
        ];
        let (listed, failed) = collect_org_results(results, &None);
        assert_eq!(listed, vec![1, 3]);
        assert_eq!(failed, vec!["ghost".to_string()]);
    }

    #[test]
    fn test_collect_org_results_empty() {
        let (listed, failed) = collect_org_results(Vec::<OrgListing<i32>>::new(), &None);
        assert!(listed.is_empty());
        assert!(failed.is_empty());
    }

    #[test]
    fn test_failure_message() {
        let msg = failure_message("ghost", &not_found("ghost"));
        assert!(msg.contains("Could not list members of 'ghost'"));
        assert!(msg.contains("not visible with the current token"));

        let denied = GhError::Api {
            status: 403,
            message: "Must have admin rights".to_string(),
        };
        let msg = failure_message("acme-corp", &denied);
        assert!(msg.contains("'acme-corp'"));
        assert!(msg.contains("Must have admin rights"));
        assert!(!msg.contains("not visible"));
    }

    #[tokio::test]
    async fn test_fetch_from_organizations_keeps_order() {
        let orgs = vec!["acme-corp".to_string(), "globex".to_string()];
        let results = fetch_from_organizations(orgs, |org| async move {
            Ok::<_, (String, GhError)>(format!("result-{}", org))
        })
        .await;

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].as_ref().unwrap(), "result-acme-corp");
        assert_eq!(results[1].as_ref().unwrap(), "result-globex");
    }

    #[tokio::test]
    async fn test_fetch_from_organizations_with_error() {
        let orgs = vec!["acme-corp".to_string(), "ghost".to_string()];
        let results = fetch_from_organizations(orgs, |org| async move {
            if org == "ghost" {
                let e = not_found(&org);
                Err((org, e))
            } else {
                Ok::<_, (String, GhError)>(org)
            }
        })
        .await;

        assert!(results[0].is_ok());
        match &results[1] {
            Err((org, e)) => {
                assert_eq!(org, "ghost");
                assert!(e.is_not_found());
            }
            Ok(_) => panic!("Expected error for 'ghost'"),
        }
    }
}
