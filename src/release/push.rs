//! Git push automation: stage everything, commit, push.

use crate::context::ServiceContext;
use crate::settings::CheckSettings;

/// What a push run will do, resolved before any mutation.
#[derive(Debug, Clone)]
pub struct PushPlan {
    /// Remote pushed to.
    pub remote: String,
    /// Branch pushed.
    pub branch: String,
    /// Commit message.
    pub message: String,
}

impl PushPlan {
    /// Renders the plan as the git commands it will run.
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "git add -A\ngit commit -m \"{}\"\ngit push {} {}",
            self.message, self.remote, self.branch
        )
    }
}

/// Resolves a push plan, querying git for the branch when the caller
/// did not name one.
///
/// # Errors
///
/// Returns an error if no branch was given and the current branch
/// cannot be determined.
pub fn resolve_plan(
    ctx: &ServiceContext,
    settings: &CheckSettings,
    branch: Option<&str>,
    message: &str,
) -> Result<PushPlan, String> {
    let branch = match branch {
        Some(branch) => branch.to_string(),
        None => ctx
            .git
            .current_branch()
            .map_err(|e| format!("could not determine current branch: {e}"))?,
    };
    Ok(PushPlan { remote: settings.remote.clone(), branch, message: message.to_string() })
}

/// Executes a push plan: stage all, commit, push. Returns the pushed
/// commit hash.
///
/// # Errors
///
/// Returns an error when the working tree is clean (nothing to commit)
/// or when any git operation fails.
pub fn execute(ctx: &ServiceContext, plan: &PushPlan) -> Result<String, String> {
    let dirty =
        ctx.git.has_changes().map_err(|e| format!("could not check working tree: {e}"))?;
    if !dirty {
        return Err("working tree is clean, nothing to commit".to_string());
    }

    ctx.git.stage_all().map_err(|e| format!("git add failed: {e}"))?;
    ctx.git.commit(&plan.message).map_err(|e| format!("git commit failed: {e}"))?;
    ctx.git
        .push(&plan.remote, &plan.branch)
        .map_err(|e| format!("git push to {}/{} failed: {e}", plan.remote, plan.branch))?;
    ctx.git.current_commit().map_err(|e| format!("could not read pushed commit: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fake::{self, FakeGitRepo};

    fn plan() -> PushPlan {
        PushPlan {
            remote: "origin".to_string(),
            branch: "main".to_string(),
            message: "Deploy backend updates".to_string(),
        }
    }

    #[test]
    fn resolve_uses_current_branch_when_none_given() {
        let mut ctx = fake::context();
        ctx.git = Box::new(FakeGitRepo::dirty().on_branch("release"));
        let plan = resolve_plan(&ctx, &CheckSettings::default(), None, "msg").unwrap();
        assert_eq!(plan.branch, "release");
        assert_eq!(plan.remote, "origin");
    }

    #[test]
    fn execute_stages_commits_and_pushes_in_order() {
        let git = FakeGitRepo::dirty();
        let log = git.log();
        let mut ctx = fake::context();
        ctx.git = Box::new(git);

        let commit = execute(&ctx, &plan()).unwrap();
        assert_eq!(commit, "abc1234def");
        assert_eq!(
            log.entries(),
            vec!["stage_all", "commit Deploy backend updates", "push origin main"]
        );
    }

    #[test]
    fn clean_tree_refuses_to_commit() {
        let git = FakeGitRepo::clean();
        let log = git.log();
        let mut ctx = fake::context();
        ctx.git = Box::new(git);

        let err = execute(&ctx, &plan()).unwrap_err();
        assert!(err.contains("nothing to commit"));
        assert!(log.entries().is_empty());
    }

    #[test]
    fn rejected_push_surfaces_the_remote_error() {
        let mut ctx = fake::context();
        ctx.git = Box::new(FakeGitRepo::dirty().rejecting_push("non-fast-forward"));
        let err = execute(&ctx, &plan()).unwrap_err();
        assert!(err.contains("non-fast-forward"));
    }

    #[test]
    fn describe_lists_the_git_commands() {
        let text = plan().describe();
        assert!(text.contains("git add -A"));
        assert!(text.contains("git commit -m \"Deploy backend updates\""));
        assert!(text.contains("git push origin main"));
    }
}
