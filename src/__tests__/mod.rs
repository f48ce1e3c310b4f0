
#[cfg(test)]
mod facade;
