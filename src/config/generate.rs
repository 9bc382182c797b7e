pub fn generate_starter_config() -> String {
    r#"# =============================================================================
# WINAVG CONFIGURATION
# =============================================================================
# Every field is optional; the values below are the built-in defaults, so the
# service behaves identically with no config file at all.
#
# Config file locations (in order of precedence):
#   1. Path specified via --config argument
#   2. ~/.config/winavg/config.yml
#   3. /etc/winavg/config.yml

web:
  # Address and port for the HTTP API and static files
  listen: 0.0.0.0:3000
  # Directory served as static assets (router fallback)
  public_dir: public

window:
  # Maximum number of distinct values the sliding window retains
  capacity: 10

sources:
  # 'f': how many Fibonacci numbers to fetch, starting 0, 1
  fibonacci_count: 10
  # 'e': even numbers from 2 up to and including this limit
  even_limit: 20
  # 'r': how many random numbers to draw, uniformly from the inclusive range
  random_count: 10
  random_min: 1
  random_max: 100
"#
    .to_string()
}
