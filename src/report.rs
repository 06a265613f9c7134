use std::fmt::Write;

use crate::models::RepositoryRef;

/// Aggregate numbers shown on the statistics line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityStats {
    pub total_repos: usize,
    pub active_repos: usize,
    pub total_commits: u64,
}

impl ActivityStats {
    pub fn from_repos(repos: &[RepositoryRef]) -> Self {
        Self {
            total_repos: repos.len(),
            active_repos: repos.iter().filter(|r| r.is_active()).count(),
            total_commits: repos.iter().map(|r| u64::from(r.commit_count)).sum(),
        }
    }
}

/// How busy a repository was, picked from its commit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityTier {
    High,
    Medium,
    Low,
}

impl ActivityTier {
    // `None` for inactive repositories, which are left out of the list
    pub fn for_count(commit_count: u32) -> Option<Self> {
        match commit_count {
            0 => None,
            1 => Some(Self::Low),
            2..=4 => Some(Self::Medium),
            _ => Some(Self::High),
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::High => "🚀",
            Self::Medium => "✨",
            Self::Low => "📝",
        }
    }
}

// Renders the Markdown body of the activity section (without marker or footer)
pub fn render_report(repos: &[RepositoryRef]) -> String {
    let stats = ActivityStats::from_repos(repos);
    let mut out = format!(
        "📈 **今日统计**: {} 个仓库，{} 个活跃，共 {} 次提交\n\n",
        stats.total_repos, stats.active_repos, stats.total_commits
    );

    if stats.active_repos > 0 {
        out.push_str("### 🔥 今日活跃仓库\n\n");
        for repo in sorted_by_activity(repos) {
            if let Some(tier) = ActivityTier::for_count(repo.commit_count) {
                // Writing into a String cannot fail
                let _ = writeln!(
                    out,
                    "- {} **[{}]({})**: {} 次提交",
                    tier.emoji(),
                    repo.name,
                    repo.html_url(),
                    repo.commit_count
                );
            }
        }
        out.push('\n');
    }

    out
}

// Most commits first; `sort_by` is stable so ties keep their input order
fn sorted_by_activity(repos: &[RepositoryRef]) -> Vec<&RepositoryRef> {
    let mut sorted: Vec<&RepositoryRef> = repos.iter().collect();
    sorted.sort_by(|a, b| b.commit_count.cmp(&a.commit_count));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, commit_count: u32) -> RepositoryRef {
        RepositoryRef {
            name: name.to_string(),
            full_name: format!("u/{}", name),
            commit_count,
        }
    }

    fn bullets(report: &str) -> Vec<&str> {
        report.lines().filter(|l| l.starts_with("- ")).collect()
    }

    #[test]
    fn stats_line_and_order_for_mixed_activity() {
        let report = render_report(&[repo("a", 7), repo("b", 0), repo("c", 2)]);

        assert!(report.starts_with("📈 **今日统计**: 3 个仓库，2 个活跃，共 9 次提交\n\n"));
        assert_eq!(
            bullets(&report),
            vec![
                "- 🚀 **[a](https://github.com/u/a)**: 7 次提交",
                "- ✨ **[c](https://github.com/u/c)**: 2 次提交",
            ]
        );
    }

    #[test]
    fn full_layout_with_active_repositories() {
        let report = render_report(&[repo("x", 1)]);
        assert_eq!(
            report,
            "📈 **今日统计**: 1 个仓库，1 个活跃，共 1 次提交\n\n\
             ### 🔥 今日活跃仓库\n\n\
             - 📝 **[x](https://github.com/u/x)**: 1 次提交\n\n"
        );
    }

    #[test]
    fn no_active_section_without_activity() {
        let report = render_report(&[repo("a", 0), repo("b", 0)]);
        assert_eq!(report, "📈 **今日统计**: 2 个仓库，0 个活跃，共 0 次提交\n\n");
    }

    #[test]
    fn empty_input_renders_only_stats() {
        assert_eq!(render_report(&[]), "📈 **今日统计**: 0 个仓库，0 个活跃，共 0 次提交\n\n");
    }

    #[test]
    fn ties_keep_input_order() {
        let report = render_report(&[repo("first", 3), repo("big", 9), repo("second", 3), repo("third", 3)]);
        let names: Vec<_> = bullets(&report)
            .iter()
            .map(|l| l.split("**[").nth(1).unwrap().split(']').next().unwrap())
            .collect();
        assert_eq!(names, vec!["big", "first", "second", "third"]);
    }

    #[test]
    fn tier_thresholds() {
        assert_eq!(ActivityTier::for_count(0), None);
        assert_eq!(ActivityTier::for_count(1), Some(ActivityTier::Low));
        assert_eq!(ActivityTier::for_count(2), Some(ActivityTier::Medium));
        assert_eq!(ActivityTier::for_count(4), Some(ActivityTier::Medium));
        assert_eq!(ActivityTier::for_count(5), Some(ActivityTier::High));
        assert_eq!(ActivityTier::for_count(120), Some(ActivityTier::High));
    }

    #[test]
    fn stats_match_input() {
        let repos = [repo("a", 4), repo("b", 0), repo("c", 0), repo("d", 11)];
        let stats = ActivityStats::from_repos(&repos);
        assert_eq!(stats, ActivityStats { total_repos: 4, active_repos: 2, total_commits: 15 });
    }
}
