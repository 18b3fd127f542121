#[cfg(test)]
mod tests {
    use crate::cmd::interactive::Input;

    #[test]
    fn kinds_are_fetches() {
        assert_eq!(Input::parse("primes"), Input::Fetch("primes".into()));
        assert_eq!(Input::parse("  FIBO \n"), Input::Fetch("fibo".into()));
    }

    #[test]
    fn unknown_words_still_fetch() {
        assert_eq!(Input::parse("squares"), Input::Fetch("squares".into()));
    }

    #[test]
    fn control_words() {
        assert_eq!(Input::parse(""), Input::Empty);
        assert_eq!(Input::parse("   "), Input::Empty);
        assert_eq!(Input::parse("quit"), Input::Quit);
        assert_eq!(Input::parse("q"), Input::Quit);
        assert_eq!(Input::parse("exit"), Input::Quit);
        assert_eq!(Input::parse("reset"), Input::Reset);
        assert_eq!(Input::parse("?"), Input::Help);
    }
}
