#[cfg(test)]
mod table;


#[cfg(test)]
mod hint;
