pub mod d100_resumen;
