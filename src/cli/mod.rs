use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web UI (upload a CSV, ask questions about it)
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8501")]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the UI on all network interfaces
        #[arg(long)]
        public: bool,
    },

    /// Ask a single question about a CSV file and print the answer
    Ask {
        path: String,

        question: String,
    },

    /// Print the first rows of a CSV file
    Preview {
        path: String,

        #[arg(short = 'n', long)]
        rows: Option<usize>,
    },
}
