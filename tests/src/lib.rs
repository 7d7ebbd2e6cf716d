#![cfg(test)]
mod lookup;
