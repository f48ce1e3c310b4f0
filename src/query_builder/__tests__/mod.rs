


#[cfg(test)]
mod union;
