//! LazySlot Usage Example
//!
//! A pipeline whose stages are declared up front but built only once their
//! configuration is known.

use lazy_slot::LazySlot;

struct Tokenizer {
    delimiter: char,
}

impl Tokenizer {
    fn split<'a>(&self, input: &'a str) -> Vec<&'a str> {
        input.split(self.delimiter).filter(|s| !s.is_empty()).collect()
    }
}

struct Filter {
    min_len: usize,
}

impl From<usize> for Filter {
    fn from(min_len: usize) -> Self {
        println!("  building filter (min_len = {min_len})");
        Filter { min_len }
    }
}

impl Drop for Filter {
    fn drop(&mut self) {
        println!("  dropping filter");
    }
}

struct Pipeline {
    tokenizer: LazySlot<Tokenizer>,
    filter: LazySlot<Filter>,
}

impl Pipeline {
    const fn new() -> Self {
        Self {
            tokenizer: LazySlot::new(),
            filter: LazySlot::new(),
        }
    }

    fn run<'a>(&self, input: &'a str) -> Vec<&'a str> {
        let tokens = self.tokenizer.split(input);
        match self.filter.try_get() {
            Some(filter) => tokens.into_iter().filter(|t| t.len() >= filter.min_len).collect(),
            None => tokens,
        }
    }
}

fn main() {
    println!("LazySlot Usage Example");
    println!("======================");

    let mut pipeline = Pipeline::new();
    println!("\n1. Declared, nothing built:");
    println!("  tokenizer initialized: {}", pipeline.tokenizer.is_initialized());
    println!("  filter initialized: {}", pipeline.filter.is_initialized());

    println!("\n2. Build the tokenizer from parsed config:");
    let delimiter = ",".parse::<char>().unwrap_or(' ');
    pipeline.tokenizer.init(Tokenizer { delimiter });
    println!("  {:?}", pipeline.run("a,bb,,ccc"));

    println!("\n3. Build the optional filter:");
    pipeline.filter.init_from(2_usize);
    println!("  {:?}", pipeline.run("a,bb,,ccc"));

    println!("\n4. Tear down:");
    drop(pipeline);
    println!("  done");
}
