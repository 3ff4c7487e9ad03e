pub mod common;


#[cfg(test)]
mod test_collections;

#[cfg(test)]
mod test_bundled_species;
