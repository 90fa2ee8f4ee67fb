use warikan_domain::Yen;

/// What a participant asked for in one chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Pay(Yen),
    Join,
    Settle,
    Help,
    Delete(&'a str),
}
