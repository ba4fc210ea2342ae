#[cfg(test)]
mod parsing;
