use crate::types::report::ProfileReport;

pub fn to_markdown(report: &ProfileReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("# Talent Report: {}\n\n", report.name));
    output.push_str(&format!("Candidate: {}\n\n", report.id));
    output.push_str("## Summary\n\n");
    output.push_str(&report.summary);
    output.push_str("\n\n");

    output.push_str("## Top Skills\n\n");
    if report.top_skills.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for skill in &report.top_skills {
            output.push_str(&format!("- {} ({:.2})\n", skill.term, skill.confidence));
        }
        output.push('\n');
    }

    output.push_str("## Repository Highlights\n\n");
    output.push_str(&format!(
        "Contributions (last 12 months): {}\n\n",
        report.highlights.recent_contributions
    ));
    if report.highlights.top_repos.is_empty() {
        output.push_str("- none\n");
    } else {
        for repo in &report.highlights.top_repos {
            if repo.topics.is_empty() {
                output.push_str(&format!("- {} ({} stars)\n", repo.name, repo.stars));
            } else {
                output.push_str(&format!(
                    "- {} ({} stars): {}\n",
                    repo.name,
                    repo.stars,
                    repo.topics.join(", ")
                ));
            }
        }
    }

    output
}
