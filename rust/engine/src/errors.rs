use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid card indices: suit {suit}, rank {rank}")]
    InvalidCard { suit: u8, rank: u8 },
    #[error("Deck exhausted")]
    EmptyDeck,
    #[error("Invalid bid amount: {amount}, minimum: {minimum}")]
    InvalidBid { amount: u32, minimum: u32 },
    #[error("Bid {amount} exceeds available funds {available}")]
    InsufficientFunds { amount: u32, available: u32 },
    #[error("No eligible players at showdown")]
    NoEligiblePlayers,
    #[error("A game needs at least two seated players")]
    NotEnoughPlayers,
}
