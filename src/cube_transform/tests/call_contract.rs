use cube_transform::{Angle, Axis, CubeConfig, CubeState, Face, InvalidArgument, TransformError};

/// Turn a band the way a move parser hands it over: letters and degrees.
fn turn_band(
    cube: &CubeState<String>,
    face: &str,
    degrees: i32,
    depth: usize,
) -> Result<CubeState<String>, TransformError> {
    let face = face.parse::<Face>()?;
    let angle = Angle::try_from(degrees)?;
    cube.turn_band(face, angle, depth)
}

fn rotate(
    cube: &CubeState<String>,
    axis: &str,
    degrees: i32,
) -> Result<CubeState<String>, TransformError> {
    Ok(cube.rotate(axis.parse::<Axis>()?, Angle::try_from(degrees)?))
}

#[test_log::test]
fn string_arguments() {
    let cube = CubeConfig::default().build().unwrap();

    let turned = turn_band(&cube, "R", 90, 1).unwrap();
    assert_eq!(turned.face(Face::U)[1], "green");
    assert_eq!(turned.face(Face::U)[0], "white");
    assert_eq!(turn_band(&turned, "R", -90, 1).unwrap(), cube);

    assert_eq!(
        turn_band(&cube, "Q", 90, 0),
        Err(TransformError::InvalidArgument(InvalidArgument::Face(
            "Q".to_owned()
        )))
    );
    assert_eq!(
        turn_band(&cube, "U", 45, 0),
        Err(TransformError::InvalidArgument(InvalidArgument::Degrees(45)))
    );
    assert_eq!(
        turn_band(&cube, "U", 90, 3),
        Err(TransformError::OutOfRange { depth: 3, size: 3 })
    );

    assert_eq!(rotate(&cube, "Y", 180).unwrap().face(Face::F)[4], "blue");
    assert_eq!(
        rotate(&cube, "y", 180),
        Err(TransformError::InvalidArgument(InvalidArgument::Axis(
            "y".to_owned()
        )))
    );
    assert_eq!(
        turn_band(&cube, "u", 90, 0),
        Err(TransformError::InvalidArgument(InvalidArgument::Face(
            "u".to_owned()
        )))
    );
    assert_eq!(
        rotate(&cube, "W", 90),
        Err(TransformError::InvalidArgument(InvalidArgument::Axis(
            "W".to_owned()
        )))
    );
}

#[test_log::test]
fn error_messages() {
    assert_eq!(
        TransformError::from(InvalidArgument::Degrees(270)).to_string(),
        "Unsupported turn of 270 degrees, expected one of -90, 90 or 180"
    );
    assert_eq!(
        TransformError::OutOfRange { depth: 4, size: 3 }.to_string(),
        "Depth 4 is out of range for a cube of size 3"
    );
}
