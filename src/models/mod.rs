pub mod usuario;

pub use usuario::{Cartao, Conta, Noticia, Usuario, ICONE_CREDITO};
