#[cfg(test)]
mod keyword;


#[cfg(test)]
mod quotes;
