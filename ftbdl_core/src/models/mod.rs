pub mod packs;
