//! `datacore::assets` submodule provides traits that encapsulate persistence of math values.
//!
//! It defines traits like [`FromFile`] and [`ToFile`] (and in-memory [`FromBytes`] and
//! [`ToBytes`]) that are implemented on all types which are either serializable or deserializable.
//!
//! `tanksmaths` serializes data by using Concise Binary Object Representation format.
//! Vectors do not persist their magnitude override, it is restored as zero.
//!

use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Error, ErrorKind, Write},
    path::Path,
};

/// Converts CBOR decoding error into `io::Error`.
///
fn invalid_data(error: serde_cbor::Error) -> Error {
    log::debug!("failed to decode CBOR data: {error}");
    Error::new(ErrorKind::InvalidData, "Wrong data format")
}
/// Converts CBOR encoding error into `io::Error`.
///
fn invalid_input(error: serde_cbor::Error) -> Error {
    log::debug!("failed to encode CBOR data: {error}");
    Error::new(ErrorKind::InvalidInput, "Wrong data format")
}

/// [`FromFile`] trait is implemented on objects that can be restored from file data (deserialized).
///
/// There is an auto implementation on all types that implement `serde::Deserialize`.
///
pub trait FromFile {
    /// Deserializes object from file.
    ///
    fn from_file(filename: impl AsRef<Path>) -> Result<Self, Error>
    where
        Self: Sized;
}
impl<T: for<'a> Deserialize<'a>> FromFile for T {
    /// Restores data from given file.
    ///
    /// This function returns an error if file does not exist or if data is not recoverable.
    ///
    fn from_file(filename: impl AsRef<Path>) -> Result<Self, Error> {
        let file: File = File::open(filename)?;
        serde_cbor::from_reader(BufReader::new(file)).map_err(invalid_data)
    }
}
/// [`ToFile`] trait is implemented on objects that can be saved to file (serialized).
///
/// There is an auto implementation on all types that implement `serde::Serialize`.
///
/// # Example
/// ```rust
/// # use tanksmaths::{datacore::assets::{FromFile, ToFile}, mathcore::vectors::Vector3};
/// let path = std::env::temp_dir().join("tanksmaths_spawn_point.cbor");
/// Vector3::new(1.0, 0.0, -4.5).to_file(&path).expect("Temporary directory should be writable");
/// assert_eq!(Vector3::from_file(&path).expect("File was just written"), Vector3::new(1.0, 0.0, -4.5));
/// # std::fs::remove_file(&path).expect("File was just written");
/// ```
///
pub trait ToFile {
    /// Serializes object to file.
    ///
    fn to_file(&self, filename: impl AsRef<Path>) -> Result<(), Error>;
}
impl<T: Serialize> ToFile for T {
    /// Saves data to file.
    ///
    /// This implementation will create a file if it does not exist, and will truncate it if it does.
    ///
    /// This function fails if file creation or truncation fails or if data is not
    /// serializable by CBOR.
    ///
    fn to_file(&self, filename: impl AsRef<Path>) -> Result<(), Error> {
        let mut writer: BufWriter<File> = BufWriter::new(File::create(filename)?);
        serde_cbor::to_writer(&mut writer, self).map_err(invalid_input)?;
        writer.flush()
    }
}

/// [`FromBytes`] trait is implemented on objects that can be restored from CBOR bytes.
///
pub trait FromBytes {
    /// Deserializes object from bytes.
    ///
    fn from_bytes(bytes: &[u8]) -> Result<Self, Error>
    where
        Self: Sized;
}
impl<T: for<'a> Deserialize<'a>> FromBytes for T {
    /// Restores data from given bytes.
    ///
    /// This function returns an error with `ErrorKind::InvalidData` if data is not recoverable.
    ///
    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        serde_cbor::from_slice(bytes).map_err(invalid_data)
    }
}
/// [`ToBytes`] trait is implemented on objects that can be encoded to CBOR bytes.
///
/// # Example
/// ```rust
/// # use tanksmaths::{datacore::assets::{FromBytes, ToBytes}, mathcore::{matrices::Matrix2D, vectors::Vector2}};
/// let matrix: Matrix2D = Matrix2D::new(Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0));
/// let bytes: Vec<u8> = matrix.to_bytes().expect("Matrix should be serializable");
/// assert_eq!(Matrix2D::from_bytes(&bytes).expect("Bytes were just encoded"), matrix);
/// ```
///
pub trait ToBytes {
    /// Serializes object to bytes.
    ///
    fn to_bytes(&self) -> Result<Vec<u8>, Error>;
}
impl<T: Serialize> ToBytes for T {
    /// Encodes data to bytes.
    ///
    /// This function fails with `ErrorKind::InvalidInput` if data is not serializable by CBOR.
    ///
    fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        serde_cbor::to_vec(self).map_err(invalid_input)
    }
}
