// French language constants.

/// File name of the French word list inside a data directory.
pub const WORDS_RESOURCE: &str = "words.txt";

/// Display label of the French word list dictionary.
pub const DEFAULT_LABEL: &str = "Words";

