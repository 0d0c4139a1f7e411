mod into_outcome;
