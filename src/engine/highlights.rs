use crate::types::profile::{Repository, RepositoryActivity};
use crate::types::report::RepositoryHighlights;

/// Most-starred repositories, name ascending on ties.
pub fn top_repositories(activity: &RepositoryActivity, limit: usize) -> Vec<Repository> {
    let mut repos = activity.repos.clone();
    repos.sort_by(|a, b| b.stars.cmp(&a.stars).then_with(|| a.name.cmp(&b.name)));
    repos.truncate(limit);
    repos
}

pub fn highlights(activity: &RepositoryActivity, limit: usize) -> RepositoryHighlights {
    RepositoryHighlights {
        recent_contributions: activity.recent_contributions,
        top_repos: top_repositories(activity, limit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, stars: u32) -> Repository {
        Repository {
            name: name.to_string(),
            stars,
            topics: Vec::new(),
        }
    }

    fn names(repos: &[Repository]) -> Vec<&str> {
        repos.iter().map(|repo| repo.name.as_str()).collect()
    }

    #[test]
    fn ties_break_by_name() {
        let activity = RepositoryActivity {
            repos: vec![repo("beta", 5), repo("alpha", 5), repo("gamma", 2)],
            ..RepositoryActivity::default()
        };
        assert_eq!(
            names(&top_repositories(&activity, 3)),
            vec!["alpha", "beta", "gamma"]
        );
    }

    #[test]
    fn keeps_only_limit_entries() {
        let activity = RepositoryActivity {
            repos: vec![repo("a", 1), repo("b", 9), repo("c", 4), repo("d", 7)],
            recent_contributions: 120,
            ..RepositoryActivity::default()
        };
        let summary = highlights(&activity, 3);
        assert_eq!(names(&summary.top_repos), vec!["b", "d", "c"]);
        assert_eq!(summary.recent_contributions, 120);
    }

    #[test]
    fn empty_activity_defaults_to_zero() {
        let summary = highlights(&RepositoryActivity::default(), 3);
        assert!(summary.top_repos.is_empty());
        assert_eq!(summary.recent_contributions, 0);
    }
}
