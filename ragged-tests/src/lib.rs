pub mod nested;
