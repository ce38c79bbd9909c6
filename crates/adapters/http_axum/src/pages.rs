//! Static pages served alongside the JSON API (no JavaScript).

use axum::Router;
use axum::response::Html;
use axum::routing::get;

/// Tic-tac-toe grid, rendered as plain HTML with CSS only.
const TICTACTOE_HTML: &str = r"<!DOCTYPE html>
<html lang='en'>
<head>
  <meta charset='utf-8'>
  <title>Tic Tac Toe</title>
  <style>
    table { border-collapse: collapse; margin: 2rem auto; }
    td {
      width: 6rem;
      height: 6rem;
      border: 2px solid #333;
      text-align: center;
      font-size: 3rem;
      font-family: sans-serif;
    }
  </style>
</head>
<body>
  <table>
    <tr><td></td><td></td><td></td></tr>
    <tr><td></td><td></td><td></td></tr>
    <tr><td></td><td></td><td></td></tr>
  </table>
</body>
</html>
";

/// Build the sub-router for the static pages.
pub fn routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(hello))
        .route("/new", get(hello_new))
        .route("/math", get(math))
        .route("/tictactoe", get(tictactoe))
}

async fn hello() -> &'static str {
    "Hello Monty!"
}

async fn hello_new() -> &'static str {
    "Hello NEW route!"
}

/// Fixed arithmetic demo; the division must not truncate.
async fn math() -> String {
    let equation = 15.0 * 25.0 + 150.0 - 23.0 / 18.0;
    equation.to_string()
}

async fn tictactoe() -> Html<&'static str> {
    Html(TICTACTOE_HTML)
}
