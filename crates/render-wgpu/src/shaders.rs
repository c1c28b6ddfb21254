/// WGSL for the whole scene: sky, water and model entry points share one
/// uniform block and the sky colour function (the water reflects it).
pub const SCENE_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    inv_view_proj: mat4x4<f32>,
    model: mat4x4<f32>,
    camera_pos: vec4<f32>,
    sun_direction: vec4<f32>,
    sun_color: vec4<f32>,
    water_color: vec4<f32>,
    // turbidity, rayleigh, mie coefficient, mie directional g
    sky_params: vec4<f32>,
    // time, scroll, distortion scale, unused
    water_params: vec4<f32>,
    light_sky: vec4<f32>,
    light_ground: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> u: Uniforms;

const PI: f32 = 3.14159265;
const SCROLL_SCALE: f32 = 20.0;

fn aces(x: vec3<f32>) -> vec3<f32> {
    let a = 2.51;
    let b = 0.03;
    let c = 2.43;
    let d = 0.59;
    let e = 0.14;
    return clamp((x * (a * x + b)) / (x * (c * x + d) + e), vec3<f32>(0.0), vec3<f32>(1.0));
}

fn sky_color(dir: vec3<f32>) -> vec3<f32> {
    let sun = normalize(u.sun_direction.xyz);
    let turbidity = u.sky_params.x;
    let rayleigh = u.sky_params.y;
    let mie = u.sky_params.z;
    let g = u.sky_params.w;

    let up = clamp(dir.y, 0.0, 1.0);
    let zenith = vec3<f32>(0.18, 0.36, 0.78) * (rayleigh * 0.5);
    let haze = clamp(turbidity / 20.0, 0.0, 1.0);
    let horizon = mix(vec3<f32>(0.75, 0.72, 0.68), vec3<f32>(0.95, 0.78, 0.6), haze);
    var col = mix(horizon, zenith, pow(up, 0.45));

    // Henyey-Greenstein forward scattering around the sun.
    let cos_theta = dot(dir, sun);
    let g2 = g * g;
    let hg = (1.0 - g2) / (4.0 * PI * pow(max(1.0 + g2 - 2.0 * g * cos_theta, 1e-4), 1.5));
    col += u.sun_color.rgb * hg * mie * 60.0;

    // Sun disk.
    col += u.sun_color.rgb * smoothstep(0.9995, 0.99985, cos_theta) * 8.0;

    // Below the horizon fade toward a darker haze.
    let below = clamp(-dir.y * 4.0, 0.0, 1.0);
    return mix(col, horizon * 0.4, below);
}

struct SkyOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) ndc: vec2<f32>,
};

@vertex
fn vs_sky(@builtin(vertex_index) index: u32) -> SkyOutput {
    // One oversized triangle covering the screen.
    let x = f32((index << 1u) & 2u) * 2.0 - 1.0;
    let y = f32(index & 2u) * 2.0 - 1.0;
    var out: SkyOutput;
    out.clip_position = vec4<f32>(x, y, 1.0, 1.0);
    out.ndc = vec2<f32>(x, y);
    return out;
}

@fragment
fn fs_sky(in: SkyOutput) -> @location(0) vec4<f32> {
    let far = u.inv_view_proj * vec4<f32>(in.ndc, 1.0, 1.0);
    let dir = normalize(far.xyz / far.w - u.camera_pos.xyz);
    return vec4<f32>(aces(sky_color(dir)), 1.0);
}

struct WaterOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
};

@vertex
fn vs_water(@location(0) position: vec3<f32>) -> WaterOutput {
    var out: WaterOutput;
    out.clip_position = u.view_proj * vec4<f32>(position, 1.0);
    out.world_pos = position;
    return out;
}

// Slope of a sum of travelling sine waves.
fn wave_slope(p: vec2<f32>, t: f32) -> vec2<f32> {
    var slope = vec2<f32>(0.0);
    var dirs = array<vec2<f32>, 4>(
        vec2<f32>(0.8, 0.6),
        vec2<f32>(-0.6, 0.8),
        vec2<f32>(0.3, -0.95),
        vec2<f32>(-0.9, -0.45),
    );
    var freqs = array<f32, 4>(0.09, 0.17, 0.31, 0.53);
    var amps = array<f32, 4>(0.5, 0.25, 0.12, 0.06);
    for (var i = 0; i < 4; i++) {
        let k = dirs[i] * freqs[i];
        let phase = dot(k, p) + t * (1.0 + f32(i) * 0.7);
        slope += k * amps[i] * cos(phase);
    }
    return slope;
}

@fragment
fn fs_water(in: WaterOutput) -> @location(0) vec4<f32> {
    let time = u.water_params.x;
    let scroll = u.water_params.y;
    let distortion = u.water_params.z;

    let p = in.world_pos.xz + vec2<f32>(0.0, -scroll * SCROLL_SCALE);
    let slope = wave_slope(p, time) * distortion * 0.15;
    let n = normalize(vec3<f32>(-slope.x, 1.0, -slope.y));

    let to_eye = u.camera_pos.xyz - in.world_pos;
    let v = normalize(to_eye);
    let r = reflect(-v, n);
    let reflected = sky_color(vec3<f32>(r.x, abs(r.y), r.z));

    let fresnel = 0.02 + 0.98 * pow(1.0 - max(dot(n, v), 0.0), 5.0);
    let sun = normalize(u.sun_direction.xyz);
    let specular = pow(max(dot(r, sun), 0.0), 180.0) * 2.0;
    var col = mix(u.water_color.rgb, reflected, fresnel) + u.sun_color.rgb * specular;

    // Fade into the horizon haze with distance.
    let fog = clamp(length(to_eye) / 1800.0, 0.0, 1.0);
    let horizon_dir = normalize(vec3<f32>(-v.x, 1e-4, -v.z));
    col = mix(col, sky_color(horizon_dir), fog * fog);
    return vec4<f32>(aces(col), 1.0);
}

struct ModelInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct ModelOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_normal: vec3<f32>,
};

@vertex
fn vs_model(vertex: ModelInput) -> ModelOutput {
    let world_pos = u.model * vec4<f32>(vertex.position, 1.0);
    var out: ModelOutput;
    out.clip_position = u.view_proj * world_pos;
    out.world_normal = normalize((u.model * vec4<f32>(vertex.normal, 0.0)).xyz);
    return out;
}

@fragment
fn fs_model(in: ModelOutput) -> @location(0) vec4<f32> {
    let n = normalize(in.world_normal);
    let hemi = mix(u.light_ground.rgb, u.light_sky.rgb, n.y * 0.5 + 0.5);
    let sun = max(dot(n, normalize(u.sun_direction.xyz)), 0.0);
    let albedo = vec3<f32>(0.8, 0.78, 0.75);
    let lit = albedo * (hemi * 0.6 + u.sun_color.rgb * sun * 0.6);
    return vec4<f32>(aces(lit), 1.0);
}
"#;
