use warikan_application::{Command, CommandParseError, CommandParser};
use warikan_domain::Yen;
use warikan_parser::{Command as ParserCommand, ParseError, parse_command};

#[derive(Default)]
pub struct WarikanCommandParser;

impl CommandParser for WarikanCommandParser {
    fn parse<'a>(&self, text: &'a str) -> Result<Command<'a>, CommandParseError> {
        match parse_command(text) {
            Ok(ParserCommand::Amount(amount)) => Ok(Command::Pay(Yen::try_from(amount)?)),
            Ok(ParserCommand::Join) => Ok(Command::Join),
            Ok(ParserCommand::Settle) => Ok(Command::Settle),
            Ok(ParserCommand::Help) => Ok(Command::Help),
            Ok(ParserCommand::Delete(id)) => Ok(Command::Delete(id)),
            Err(err) => Err(map_parse_error(err)),
        }
    }
}

fn map_parse_error(err: ParseError) -> CommandParseError {
    match err {
        ParseError::Empty => CommandParseError::InvalidArgument(String::new()),
        ParseError::InvalidArgument(text) => CommandParseError::InvalidArgument(text),
        ParseError::MissingPaymentId => {
            CommandParseError::InvalidArgument("missing payment id".to_string())
        }
        ParseError::AmountOutOfRange(_) => {
            CommandParseError::Amount(warikan_domain::AmountError::Overflow)
        }
    }
}
