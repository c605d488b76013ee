/// How much the planner logs while it searches.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Only errors
    Silent,
    /// Task loading, search start and final statistics
    #[default]
    Normal,
    /// Additionally one line per expanded state
    Verbose,
    /// Additionally every generated successor
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_grow_with_verbosity() {
        let levels: Vec<tracing::Level> = [
            Verbosity::Silent,
            Verbosity::Normal,
            Verbosity::Verbose,
            Verbosity::Debug,
        ]
        .into_iter()
        .map(Into::into)
        .collect();
        assert!(levels.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
