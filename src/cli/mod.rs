use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// List every repository of the configured account
    List,

    /// Aggregate one repository's full detail (metadata, file count,
    /// manifest content, active webhooks)
    Detail {
        repo_name: String,
    },

    /// Scan the statically configured repository list (REPO_LIST),
    /// metadata only
    Batch,
}
