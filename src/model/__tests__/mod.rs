

#[cfg(test)]
mod json;
