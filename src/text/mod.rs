// Text preparation: turning raw corpora into whitespace-joined tokens.

pub mod normalize;
